use serde::{Deserialize, Serialize};

/// Presentation tier of a score: ten ordered 10-point buckets, 0 (<10) to 9 (≥90).
/// Mapping a tier to an actual color is left to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ColorTier(u8);

impl ColorTier {
    pub const COUNT: u8 = 10;
    pub const LOWEST: ColorTier = ColorTier(0);
    pub const HIGHEST: ColorTier = ColorTier(Self::COUNT - 1);

    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT).then_some(ColorTier(index))
    }

    /// Buckets a 0–100 score. Negative and NaN land in the lowest tier,
    /// anything from 90 up in the highest.
    pub fn of(score: f64) -> Self {
        if score.is_nan() || score < 10.0 {
            return Self::LOWEST;
        }
        let bucket = (score / 10.0).floor();
        if bucket >= (Self::COUNT - 1) as f64 {
            Self::HIGHEST
        } else {
            ColorTier(bucket as u8)
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ColorTier {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        ColorTier::new(index).ok_or_else(|| format!("color tier must be below {}, got {index}", Self::COUNT))
    }
}

impl From<ColorTier> for u8 {
    fn from(tier: ColorTier) -> Self {
        tier.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_edges() {
        assert_eq!(ColorTier::of(0.0).index(), 0);
        assert_eq!(ColorTier::of(9.999).index(), 0);
        assert_eq!(ColorTier::of(10.0).index(), 1);
        assert_eq!(ColorTier::of(19.99).index(), 1);
        assert_eq!(ColorTier::of(55.0).index(), 5);
        assert_eq!(ColorTier::of(76.0).index(), 7);
        assert_eq!(ColorTier::of(89.99).index(), 8);
        assert_eq!(ColorTier::of(90.0).index(), 9);
        assert_eq!(ColorTier::of(100.0).index(), 9);
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(ColorTier::of(-5.0), ColorTier::LOWEST);
        assert_eq!(ColorTier::of(f64::NAN), ColorTier::LOWEST);
        assert_eq!(ColorTier::of(1e9), ColorTier::HIGHEST);
        assert_eq!(ColorTier::of(f64::INFINITY), ColorTier::HIGHEST);
    }

    #[test]
    fn test_tiers_are_ordered() {
        assert!(ColorTier::of(35.0) < ColorTier::of(45.0));
        assert_eq!(ColorTier::of(41.0), ColorTier::of(49.0));
    }

    #[test]
    fn test_new_rejects_tier_ten() {
        assert!(ColorTier::new(9).is_some());
        assert!(ColorTier::new(10).is_none());
        assert!(serde_json::from_str::<ColorTier>("10").is_err());
        assert_eq!(serde_json::from_str::<ColorTier>("3").unwrap().index(), 3);
    }
}
