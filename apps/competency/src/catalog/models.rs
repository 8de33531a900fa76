use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! catalog_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                $name(raw)
            }
        }
    };
}

catalog_id!(
    /// Opaque sector identifier, unique among sectors.
    SectorId
);
catalog_id!(
    /// Opaque job identifier, unique among jobs.
    JobId
);
catalog_id!(
    /// Opaque skill identifier, unique within its job.
    SkillId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

/// A role within a sector, carrying its own skill catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl Job {
    pub fn has_skill(&self, skill_id: SkillId) -> bool {
        self.skills.iter().any(|s| s.id == skill_id)
    }
}

/// Top-level competency domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: SectorId,
    pub name: String,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl Sector {
    pub fn job(&self, job_id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == job_id)
    }
}
