use anyhow::{ensure, Context, Result};

use crate::scoring::tier::ColorTier;
use crate::selection::seniority::Seniority;

/// Library configuration loaded from environment variables.
/// Every key is optional; `Config::default()` matches an empty environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seniority assigned to a freshly selected sector, on the 0–20 point scale.
    pub default_seniority: Seniority,
    /// Opportunities below this tier are hidden by `score_opportunities_with`.
    pub min_display_tier: ColorTier,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_seniority: Seniority::MIN,
            min_display_tier: ColorTier::LOWEST,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_points = parse_env_or("DEFAULT_SENIORITY_POINTS", 0)?;
        ensure!(
            default_points <= Seniority::MAX_POINTS,
            "DEFAULT_SENIORITY_POINTS must be between 0 and {}, got {default_points}",
            Seniority::MAX_POINTS
        );

        let min_tier = parse_env_or("MIN_DISPLAY_TIER", 0)?;
        let min_display_tier = ColorTier::new(min_tier)
            .with_context(|| format!("MIN_DISPLAY_TIER must be between 0 and 9, got {min_tier}"))?;

        Ok(Config {
            default_seniority: Seniority::from_points(default_points),
            min_display_tier,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_env_or(key: &str, default: u8) -> Result<u8> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .with_context(|| format!("{key} must be a small non-negative integer")),
        Err(_) => Ok(default),
    }
}
