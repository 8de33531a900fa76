use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Installs structured logging for a host process embedding the crate.
/// `RUST_LOG` wins when set; otherwise logs this crate at `config.rust_log`.
/// Returns false when a global subscriber was already installed.
pub fn init_tracing(config: &Config) -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
