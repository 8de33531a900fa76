//! Competency selection and match scoring for the K-Profile / K-Player
//! marketplace.
//!
//! - `selection`: the Sector → Job → Skill tree a candidate or opportunity
//!   edits, capped at three sectors, with total (never failing) operations.
//! - `scoring`: the fixed-weight competence score over backend match
//!   percentages, its ten color tiers, and opportunity ranking.
//! - `pickers` / `session`: the three editing contexts and the async glue to
//!   the catalog, persistence and matching collaborators.

pub mod catalog;
pub mod collaborators;
pub mod config;
pub mod errors;
pub mod pickers;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod telemetry;

pub use catalog::{Catalog, Job, JobId, Sector, SectorId, Skill, SkillId};
pub use config::Config;
pub use errors::{CatalogError, CompetencyError};
pub use pickers::PickerContext;
pub use scoring::{competence_score, ColorTier, MatchPercentages};
pub use selection::{ActiveSector, Change, CompetencyTree, Seniority, SeniorityLevel};
pub use session::EditingSession;
