//! Persisted selection shape: `{ id, seniority, jobs: [{ id, skills: [id] }] }[]`.
//!
//! Loading is lenient. Whatever the store hands back is reconciled against the
//! current catalog; anything that no longer fits is dropped with a warning.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{Catalog, JobId, SectorId, SkillId};
use crate::errors::Result;
use crate::selection::models::{JobSelection, SectorSelection};
use crate::selection::seniority::{Seniority, SeniorityScale};
use crate::selection::tree::{CompetencyTree, MAX_SECTORS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    #[serde(default)]
    pub skills: Vec<SkillId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorRecord {
    pub id: SectorId,
    /// Raw value on the owner's `SeniorityScale`.
    pub seniority: i64,
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
}

impl CompetencyTree {
    /// Rebuilds a tree from persisted records. The first kept sector is active.
    pub fn from_records(
        catalog: &Catalog,
        records: &[SectorRecord],
        scale: SeniorityScale,
        default_seniority: Seniority,
    ) -> Self {
        let mut sectors: Vec<SectorSelection> = Vec::new();

        for record in records {
            if !catalog.has_sector(record.id) {
                warn!("Dropping persisted sector {}: not in catalog", record.id);
                continue;
            }
            if sectors.iter().any(|s| s.id == record.id) {
                warn!("Dropping duplicate persisted sector {}", record.id);
                continue;
            }
            if sectors.len() >= MAX_SECTORS {
                warn!(
                    "Dropping persisted sector {}: more than {MAX_SECTORS} sectors",
                    record.id
                );
                continue;
            }
            if !scale.in_range(record.seniority) {
                warn!(
                    "Clamping persisted seniority {} of sector {} into the {:?} range",
                    record.seniority, record.id, scale
                );
            }

            sectors.push(SectorSelection {
                id: record.id,
                seniority: scale.decode(record.seniority),
                jobs: sanitize_jobs(catalog, record.id, &record.jobs),
            });
        }

        CompetencyTree::from_sanitized(sectors, default_seniority)
    }

    pub fn to_records(&self, scale: SeniorityScale) -> Vec<SectorRecord> {
        self.selection()
            .sectors()
            .iter()
            .map(|sector| SectorRecord {
                id: sector.id,
                seniority: scale.encode(sector.seniority),
                jobs: sector
                    .jobs
                    .iter()
                    .map(|job| JobRecord {
                        id: job.id,
                        skills: job.skills.iter().copied().collect(),
                    })
                    .collect(),
            })
            .collect()
    }
}

fn sanitize_jobs(catalog: &Catalog, sector_id: SectorId, records: &[JobRecord]) -> Vec<JobSelection> {
    let mut seen = HashSet::new();
    let mut jobs = Vec::new();

    for record in records {
        if !catalog.has_job(sector_id, record.id) {
            warn!(
                "Dropping persisted job {} under sector {sector_id}: not in catalog",
                record.id
            );
            continue;
        }
        if !seen.insert(record.id) {
            warn!("Dropping duplicate persisted job {}", record.id);
            continue;
        }

        let skills: BTreeSet<SkillId> = record
            .skills
            .iter()
            .copied()
            .filter(|&skill| {
                let known = catalog.has_skill(sector_id, record.id, skill);
                if !known {
                    warn!("Dropping persisted skill {skill} under job {}", record.id);
                }
                known
            })
            .collect();

        jobs.push(JobSelection {
            id: record.id,
            skills,
        });
    }

    jobs
}

pub fn to_json(records: &[SectorRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

pub fn from_json(raw: &str) -> Result<Vec<SectorRecord>> {
    Ok(serde_json::from_str(raw)?)
}
