use thiserror::Error;

use crate::catalog::{JobId, SectorId, SkillId};

/// Reasons a catalog is refused at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Sector {0} appears more than once in the catalog")]
    DuplicateSector(SectorId),

    #[error("Job {job} appears more than once under sector {sector}")]
    DuplicateJob { sector: SectorId, job: JobId },

    #[error("Skill {skill} appears more than once under job {job}")]
    DuplicateSkill { job: JobId, skill: SkillId },
}

/// Crate-level error type.
/// Tree operations never produce one of these; only construction and the
/// collaborator seams do.
#[derive(Debug, Error)]
pub enum CompetencyError {
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(#[from] CatalogError),

    #[error("Collaborator error: {0}")]
    Collaborator(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CompetencyError {
    /// Stable machine-readable code, mirrored in logs.
    pub fn code(&self) -> &'static str {
        match self {
            CompetencyError::InvalidCatalog(_) => "INVALID_CATALOG",
            CompetencyError::Collaborator(_) => "COLLABORATOR_ERROR",
            CompetencyError::Serialization(_) => "SERIALIZATION_ERROR",
            CompetencyError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, CompetencyError>;
