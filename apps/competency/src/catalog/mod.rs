//! Catalog — the read-only Sector → Job → Skill tree supplied by the catalog
//! provider. Every tree operation validates ids against it.

pub mod models;

use std::collections::HashSet;

use serde::Serialize;

pub use models::{Job, JobId, Sector, SectorId, Skill, SkillId};

use crate::errors::CatalogError;

/// Validated catalog. Sector ids are unique, job ids are unique within their
/// sector, and skill ids are unique within their job.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    sectors: Vec<Sector>,
}

impl Catalog {
    pub fn new(sectors: Vec<Sector>) -> Result<Self, CatalogError> {
        let mut sector_ids = HashSet::new();

        for sector in &sectors {
            if !sector_ids.insert(sector.id) {
                return Err(CatalogError::DuplicateSector(sector.id));
            }
            let mut job_ids = HashSet::new();
            for job in &sector.jobs {
                if !job_ids.insert(job.id) {
                    return Err(CatalogError::DuplicateJob {
                        sector: sector.id,
                        job: job.id,
                    });
                }
                let mut skill_ids = HashSet::new();
                for skill in &job.skills {
                    if !skill_ids.insert(skill.id) {
                        return Err(CatalogError::DuplicateSkill {
                            job: job.id,
                            skill: skill.id,
                        });
                    }
                }
            }
        }

        Ok(Catalog { sectors })
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn sector(&self, sector_id: SectorId) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == sector_id)
    }

    pub fn job(&self, sector_id: SectorId, job_id: JobId) -> Option<&Job> {
        self.sector(sector_id).and_then(|s| s.job(job_id))
    }

    pub fn has_sector(&self, sector_id: SectorId) -> bool {
        self.sector(sector_id).is_some()
    }

    pub fn has_job(&self, sector_id: SectorId, job_id: JobId) -> bool {
        self.job(sector_id, job_id).is_some()
    }

    /// True only when the skill belongs to that job, under that sector.
    pub fn has_skill(&self, sector_id: SectorId, job_id: JobId, skill_id: SkillId) -> bool {
        self.job(sector_id, job_id)
            .map(|j| j.has_skill(skill_id))
            .unwrap_or(false)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    fn job(id: u64, skills: &[u64]) -> Job {
        Job {
            id: JobId(id),
            name: format!("job-{id}"),
            skills: skills
                .iter()
                .map(|&s| Skill {
                    id: SkillId(s),
                    name: format!("skill-{s}"),
                })
                .collect(),
        }
    }

    /// Sectors 5, 7, 9, 11, 13. Sector N owns jobs N*10 and N*10+1;
    /// job J owns skills J*10, J*10+1, J*10+2.
    pub fn sample_catalog() -> Catalog {
        let sectors = [5_u64, 7, 9, 11, 13]
            .iter()
            .map(|&sid| Sector {
                id: SectorId(sid),
                name: format!("sector-{sid}"),
                jobs: [sid * 10, sid * 10 + 1]
                    .iter()
                    .map(|&jid| job(jid, &[jid * 10, jid * 10 + 1, jid * 10 + 2]))
                    .collect(),
            })
            .collect();
        Catalog::new(sectors).expect("fixture catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_catalog;
    use super::*;

    #[test]
    fn test_lookups_follow_the_hierarchy() {
        let catalog = sample_catalog();
        assert!(catalog.has_sector(SectorId(5)));
        assert!(!catalog.has_sector(SectorId(6)));
        assert!(catalog.has_job(SectorId(5), JobId(50)));
        // job 70 exists, but under sector 7
        assert!(!catalog.has_job(SectorId(5), JobId(70)));
        assert!(catalog.has_skill(SectorId(5), JobId(50), SkillId(500)));
        assert!(!catalog.has_skill(SectorId(5), JobId(50), SkillId(510)));
        assert!(!catalog.has_skill(SectorId(7), JobId(50), SkillId(500)));
    }

    #[test]
    fn test_duplicate_sector_rejected() {
        let sector = Sector {
            id: SectorId(1),
            name: "IT".to_string(),
            jobs: vec![],
        };
        let err = Catalog::new(vec![sector.clone(), sector]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateSector(SectorId(1)));
    }

    fn developer(skills: &[u64]) -> Job {
        Job {
            id: JobId(3),
            name: "Developer".to_string(),
            skills: skills
                .iter()
                .map(|&s| Skill {
                    id: SkillId(s),
                    name: format!("skill-{s}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_same_job_id_under_two_sectors_is_allowed() {
        let sectors = vec![
            Sector {
                id: SectorId(1),
                name: "IT".to_string(),
                jobs: vec![developer(&[30])],
            },
            Sector {
                id: SectorId(2),
                name: "Finance".to_string(),
                jobs: vec![developer(&[31])],
            },
        ];
        let catalog = Catalog::new(sectors).unwrap();

        assert!(catalog.has_skill(SectorId(1), JobId(3), SkillId(30)));
        assert!(!catalog.has_skill(SectorId(1), JobId(3), SkillId(31)));
        assert!(catalog.has_skill(SectorId(2), JobId(3), SkillId(31)));
    }

    #[test]
    fn test_duplicate_job_within_sector_rejected() {
        let sectors = vec![Sector {
            id: SectorId(2),
            name: "Finance".to_string(),
            jobs: vec![developer(&[]), developer(&[])],
        }];
        let err = Catalog::new(sectors).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateJob {
                sector: SectorId(2),
                job: JobId(3)
            }
        );
    }

    #[test]
    fn test_duplicate_skill_within_job_rejected() {
        let skill = Skill {
            id: SkillId(9),
            name: "Rust".to_string(),
        };
        let sectors = vec![Sector {
            id: SectorId(1),
            name: "IT".to_string(),
            jobs: vec![Job {
                id: JobId(3),
                name: "Developer".to_string(),
                skills: vec![skill.clone(), skill],
            }],
        }];
        assert!(matches!(
            Catalog::new(sectors),
            Err(CatalogError::DuplicateSkill { .. })
        ));
    }

    #[test]
    fn test_catalog_deserializes_without_optional_children() {
        let sectors: Vec<Sector> =
            serde_json::from_str(r#"[{"id": 4, "name": "Retail"}]"#).unwrap();
        let catalog = Catalog::new(sectors).unwrap();
        assert!(catalog.sector(SectorId(4)).unwrap().jobs.is_empty());
    }
}
