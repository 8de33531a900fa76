use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{JobId, SectorId, SkillId};
use crate::selection::seniority::Seniority;

/// An active job and the skills chosen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobSelection {
    pub id: JobId,
    pub skills: BTreeSet<SkillId>,
}

impl JobSelection {
    pub fn empty(id: JobId) -> Self {
        JobSelection {
            id,
            skills: BTreeSet::new(),
        }
    }
}

/// A selected sector with its seniority and active jobs, in activation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSelection {
    pub id: SectorId,
    pub seniority: Seniority,
    pub jobs: Vec<JobSelection>,
}

impl SectorSelection {
    pub fn job(&self, job_id: JobId) -> Option<&JobSelection> {
        self.jobs.iter().find(|j| j.id == job_id)
    }

    pub(crate) fn job_mut(&mut self, job_id: JobId) -> Option<&mut JobSelection> {
        self.jobs.iter_mut().find(|j| j.id == job_id)
    }

    pub fn skill_count(&self) -> usize {
        self.jobs.iter().map(|j| j.skills.len()).sum()
    }
}

/// The whole selection. Only `CompetencyTree` mutates it, so the sector cap
/// and id uniqueness hold for every value a caller can observe.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub(crate) sectors: Vec<SectorSelection>,
}

impl Selection {
    pub fn sectors(&self) -> &[SectorSelection] {
        &self.sectors
    }

    pub fn sector(&self, sector_id: SectorId) -> Option<&SectorSelection> {
        self.sectors.iter().find(|s| s.id == sector_id)
    }

    pub fn sector_ids(&self) -> Vec<SectorId> {
        self.sectors.iter().map(|s| s.id).collect()
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}
