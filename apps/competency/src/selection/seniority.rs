//! Seniority — canonical 0–20 point scale, bucketed into five named levels.
//!
//! Candidate profiles persist points; opportunity requirements persist the
//! 1–5 level. Both convert through `Seniority` at the persistence boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Experience rating on the 21-point scale (0..=20). Always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub struct Seniority(u8);

impl Seniority {
    pub const MAX_POINTS: u8 = 20;
    pub const MIN: Seniority = Seniority(0);
    pub const MAX: Seniority = Seniority(Self::MAX_POINTS);

    /// Clamps into 0..=20.
    pub fn from_points(points: impl Into<i64>) -> Self {
        let points: i64 = points.into();
        Seniority(points.clamp(0, Self::MAX_POINTS as i64) as u8)
    }

    /// Lower bound of the level's bucket, so `level_of` maps it back to `level`.
    pub fn from_level(level: SeniorityLevel) -> Self {
        Seniority((level.rank() - 1) * 5)
    }

    pub fn points(self) -> u8 {
        self.0
    }

    pub fn level(self) -> SeniorityLevel {
        SeniorityLevel::from_rank(level_of(self.0 as i64))
    }
}

impl Default for Seniority {
    fn default() -> Self {
        Seniority::MIN
    }
}

impl From<i64> for Seniority {
    fn from(points: i64) -> Self {
        Seniority::from_points(points)
    }
}

impl From<Seniority> for u8 {
    fn from(s: Seniority) -> Self {
        s.0
    }
}

/// Buckets points into a level rank: [0–4]→1, [5–9]→2, [10–14]→3, [15–19]→4, [20+]→5.
/// Negative input counts as 0.
pub fn level_of(points: i64) -> u8 {
    match points {
        i64::MIN..=4 => 1,
        5..=9 => 2,
        10..=14 => 3,
        15..=19 => 4,
        _ => 5,
    }
}

/// The five named levels shared by every seniority scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityLevel {
    Junior,
    Intermediate,
    Senior,
    Expert,
    Principal,
}

impl SeniorityLevel {
    pub const ALL: [SeniorityLevel; 5] = [
        SeniorityLevel::Junior,
        SeniorityLevel::Intermediate,
        SeniorityLevel::Senior,
        SeniorityLevel::Expert,
        SeniorityLevel::Principal,
    ];

    /// 1-based rank. Out-of-range ranks clamp to the nearest level.
    pub fn from_rank(rank: u8) -> Self {
        match rank {
            0 | 1 => SeniorityLevel::Junior,
            2 => SeniorityLevel::Intermediate,
            3 => SeniorityLevel::Senior,
            4 => SeniorityLevel::Expert,
            _ => SeniorityLevel::Principal,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            SeniorityLevel::Junior => 1,
            SeniorityLevel::Intermediate => 2,
            SeniorityLevel::Senior => 3,
            SeniorityLevel::Expert => 4,
            SeniorityLevel::Principal => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeniorityLevel::Junior => "Junior",
            SeniorityLevel::Intermediate => "Intermediate",
            SeniorityLevel::Senior => "Senior",
            SeniorityLevel::Expert => "Expert",
            SeniorityLevel::Principal => "Principal",
        }
    }
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a seniority value is written in a persisted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityScale {
    /// 0..=20
    Points,
    /// 1..=5
    Levels,
}

impl SeniorityScale {
    /// Whether `raw` is a value this scale can hold without clamping.
    pub fn in_range(self, raw: i64) -> bool {
        match self {
            SeniorityScale::Points => (0..=Seniority::MAX_POINTS as i64).contains(&raw),
            SeniorityScale::Levels => (1..=5).contains(&raw),
        }
    }

    /// Out-of-range values are clamped to the nearest end of the scale.
    pub fn decode(self, raw: i64) -> Seniority {
        match self {
            SeniorityScale::Points => Seniority::from_points(raw),
            SeniorityScale::Levels => {
                let rank = raw.clamp(1, 5) as u8;
                Seniority::from_level(SeniorityLevel::from_rank(rank))
            }
        }
    }

    pub fn encode(self, seniority: Seniority) -> i64 {
        match self {
            SeniorityScale::Points => seniority.points() as i64,
            SeniorityScale::Levels => seniority.level().rank() as i64,
        }
    }
}
