//! Competency Tree — the editable Sector → Job → Skill selection.
//!
//! Every mutation is total: an illegal request leaves the tree untouched and
//! comes back as `Change::Rejected`, which callers are free to ignore. The
//! catalog is passed into each operation; the tree holds no reference to it.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, Job, JobId, SectorId, SkillId};
use crate::selection::models::{JobSelection, SectorSelection, Selection};
use crate::selection::seniority::{Seniority, SeniorityLevel};

/// Hard cap on selected sectors.
pub const MAX_SECTORS: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Operation outcomes
// ────────────────────────────────────────────────────────────────────────────

/// What a mutating operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    Added,
    Removed,
    Updated,
    Rejected(Rejection),
}

impl Change {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Change::Rejected(_))
    }
}

/// Why a mutation was turned into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    SectorCapReached,
    UnknownSector(SectorId),
    SectorNotSelected(SectorId),
    UnknownJob { sector: SectorId, job: JobId },
    UnknownSkill { job: JobId, skill: SkillId },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::SectorCapReached => {
                write!(f, "already {MAX_SECTORS} sectors selected")
            }
            Rejection::UnknownSector(id) => write!(f, "sector {id} is not in the catalog"),
            Rejection::SectorNotSelected(id) => write!(f, "sector {id} is not selected"),
            Rejection::UnknownJob { sector, job } => {
                write!(f, "job {job} does not belong to sector {sector}")
            }
            Rejection::UnknownSkill { job, skill } => {
                write!(f, "skill {skill} does not belong to job {job}")
            }
        }
    }
}

/// Jobs and skills a cascading sector delete would discard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RemovalPreview {
    pub jobs: usize,
    pub skills: usize,
}

impl RemovalPreview {
    /// Nothing to lose, so a confirmation step can be skipped.
    pub fn is_empty(&self) -> bool {
        self.jobs == 0 && self.skills == 0
    }
}

/// The sector whose jobs are currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveSector {
    #[default]
    NoneActive,
    Sector(SectorId),
}

impl ActiveSector {
    pub fn id(self) -> Option<SectorId> {
        match self {
            ActiveSector::NoneActive => None,
            ActiveSector::Sector(id) => Some(id),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tree
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompetencyTree {
    selection: Selection,
    active: ActiveSector,
    default_seniority: Seniority,
}

impl CompetencyTree {
    /// Empty tree. New sectors start at `default_seniority`.
    pub fn new(default_seniority: Seniority) -> Self {
        CompetencyTree {
            selection: Selection::default(),
            active: ActiveSector::NoneActive,
            default_seniority,
        }
    }

    /// Assembles a tree from already-sanitized parts. The first sector is active.
    pub(crate) fn from_sanitized(sectors: Vec<SectorSelection>, default_seniority: Seniority) -> Self {
        let active = sectors
            .first()
            .map(|s| ActiveSector::Sector(s.id))
            .unwrap_or_default();
        CompetencyTree {
            selection: Selection { sectors },
            active,
            default_seniority,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn into_selection(self) -> Selection {
        self.selection
    }

    pub fn default_seniority(&self) -> Seniority {
        self.default_seniority
    }

    // ── Sector operations ─────────────────────────────────────────────────

    /// Removes the sector if selected (cascading), else appends it while
    /// fewer than `MAX_SECTORS` are selected.
    pub fn toggle_sector(&mut self, catalog: &Catalog, sector_id: SectorId) -> Change {
        if let Some(pos) = self.sector_position(sector_id) {
            self.remove_at(pos);
            return Change::Removed;
        }
        if !catalog.has_sector(sector_id) {
            return reject("toggle_sector", Rejection::UnknownSector(sector_id));
        }
        if self.selection.sectors.len() >= MAX_SECTORS {
            return reject("toggle_sector", Rejection::SectorCapReached);
        }

        self.selection.sectors.push(SectorSelection {
            id: sector_id,
            seniority: self.default_seniority,
            jobs: Vec::new(),
        });
        self.active = ActiveSector::Sector(sector_id);
        Change::Added
    }

    /// Cascading delete of a selected sector. Its jobs and skills are gone for good;
    /// check `removal_preview` first if the user should confirm.
    pub fn remove_sector(&mut self, sector_id: SectorId) -> Change {
        match self.sector_position(sector_id) {
            Some(pos) => {
                self.remove_at(pos);
                Change::Removed
            }
            None => reject("remove_sector", Rejection::SectorNotSelected(sector_id)),
        }
    }

    /// What removing the sector would discard. `None` when it is not selected.
    pub fn removal_preview(&self, sector_id: SectorId) -> Option<RemovalPreview> {
        self.selection.sector(sector_id).map(|s| RemovalPreview {
            jobs: s.jobs.len(),
            skills: s.skill_count(),
        })
    }

    /// Replaces the sector's seniority; `points` is clamped to 0..=20.
    pub fn set_seniority(&mut self, sector_id: SectorId, points: i64) -> Change {
        match self.sector_mut(sector_id) {
            Some(sector) => {
                sector.seniority = Seniority::from_points(points);
                Change::Updated
            }
            None => reject("set_seniority", Rejection::SectorNotSelected(sector_id)),
        }
    }

    /// Sets seniority from a discrete level (the lower bound of its bucket).
    pub fn set_seniority_level(&mut self, sector_id: SectorId, level: SeniorityLevel) -> Change {
        self.set_seniority(sector_id, Seniority::from_level(level).points() as i64)
    }

    pub fn set_active_sector(&mut self, sector_id: SectorId) -> Change {
        if !self.is_sector_selected(sector_id) {
            return reject("set_active_sector", Rejection::SectorNotSelected(sector_id));
        }
        self.active = ActiveSector::Sector(sector_id);
        Change::Updated
    }

    // ── Job and skill operations ──────────────────────────────────────────

    /// Removes an active job with its skills, or activates it with no skills.
    pub fn toggle_job(&mut self, catalog: &Catalog, sector_id: SectorId, job_id: JobId) -> Change {
        let known = catalog.has_job(sector_id, job_id);
        let Some(sector) = self.sector_mut(sector_id) else {
            return reject("toggle_job", Rejection::SectorNotSelected(sector_id));
        };

        if let Some(pos) = sector.jobs.iter().position(|j| j.id == job_id) {
            sector.jobs.remove(pos);
            return Change::Removed;
        }
        if !known {
            return reject(
                "toggle_job",
                Rejection::UnknownJob {
                    sector: sector_id,
                    job: job_id,
                },
            );
        }

        sector.jobs.push(JobSelection::empty(job_id));
        Change::Added
    }

    /// Toggles a skill, activating its job first when the job is not active yet.
    /// This lets a user pick a skill without confirming the job beforehand.
    pub fn ensure_job_then_toggle_skill(
        &mut self,
        catalog: &Catalog,
        sector_id: SectorId,
        job_id: JobId,
        skill_id: SkillId,
    ) -> Change {
        let known = catalog.has_skill(sector_id, job_id, skill_id);
        let Some(sector) = self.sector_mut(sector_id) else {
            return reject("toggle_skill", Rejection::SectorNotSelected(sector_id));
        };
        if !known {
            return reject(
                "toggle_skill",
                Rejection::UnknownSkill {
                    job: job_id,
                    skill: skill_id,
                },
            );
        }

        match sector.job_mut(job_id) {
            Some(job) => {
                if job.skills.remove(&skill_id) {
                    Change::Removed
                } else {
                    job.skills.insert(skill_id);
                    Change::Added
                }
            }
            None => {
                let mut job = JobSelection::empty(job_id);
                job.skills.insert(skill_id);
                sector.jobs.push(job);
                Change::Added
            }
        }
    }

    /// Same as `ensure_job_then_toggle_skill`.
    pub fn toggle_skill(
        &mut self,
        catalog: &Catalog,
        sector_id: SectorId,
        job_id: JobId,
        skill_id: SkillId,
    ) -> Change {
        self.ensure_job_then_toggle_skill(catalog, sector_id, job_id, skill_id)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn is_sector_selected(&self, sector_id: SectorId) -> bool {
        self.selection.sector(sector_id).is_some()
    }

    pub fn is_job_selected(&self, sector_id: SectorId, job_id: JobId) -> bool {
        self.job(sector_id, job_id).is_some()
    }

    pub fn is_skill_selected(&self, sector_id: SectorId, job_id: JobId, skill_id: SkillId) -> bool {
        self.job(sector_id, job_id)
            .map(|j| j.skills.contains(&skill_id))
            .unwrap_or(false)
    }

    pub fn selected_skill_count_for_job(&self, sector_id: SectorId, job_id: JobId) -> usize {
        self.job(sector_id, job_id)
            .map(|j| j.skills.len())
            .unwrap_or(0)
    }

    /// Seniority of a selected sector, `Seniority::MIN` otherwise.
    pub fn seniority_of(&self, sector_id: SectorId) -> Seniority {
        self.selection
            .sector(sector_id)
            .map(|s| s.seniority)
            .unwrap_or(Seniority::MIN)
    }

    pub fn active_sector(&self) -> ActiveSector {
        self.active
    }

    /// Catalog jobs of the active sector; empty when nothing is active.
    pub fn active_jobs<'c>(&self, catalog: &'c Catalog) -> &'c [Job] {
        self.active
            .id()
            .and_then(|id| catalog.sector(id))
            .map(|s| s.jobs.as_slice())
            .unwrap_or(&[])
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn job(&self, sector_id: SectorId, job_id: JobId) -> Option<&JobSelection> {
        self.selection.sector(sector_id).and_then(|s| s.job(job_id))
    }

    fn sector_position(&self, sector_id: SectorId) -> Option<usize> {
        self.selection.sectors.iter().position(|s| s.id == sector_id)
    }

    fn sector_mut(&mut self, sector_id: SectorId) -> Option<&mut SectorSelection> {
        self.selection.sectors.iter_mut().find(|s| s.id == sector_id)
    }

    fn remove_at(&mut self, pos: usize) {
        let removed = self.selection.sectors.remove(pos);
        debug!(
            "Removed sector {} ({} jobs, {} skills discarded)",
            removed.id,
            removed.jobs.len(),
            removed.skill_count()
        );

        if self.active == ActiveSector::Sector(removed.id) {
            self.active = self
                .selection
                .sectors
                .first()
                .map(|s| ActiveSector::Sector(s.id))
                .unwrap_or(ActiveSector::NoneActive);
        }
    }
}

fn reject(operation: &str, rejection: Rejection) -> Change {
    debug!("{operation} ignored: {rejection}");
    Change::Rejected(rejection)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
