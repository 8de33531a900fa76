//! Collaborator seams — the external services the core depends on.
//!
//! The core never talks to the network. Callers implement these traits over
//! whatever transport they have (HTTP client, cache, test fake) and the
//! session/ranking helpers await them before handing resolved data to the
//! synchronous tree and scorer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::Sector;
use crate::errors::CompetencyError;
use crate::scoring::competence::MatchPercentages;
use crate::selection::records::SectorRecord;

/// Whose competencies a selection describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum SelectionOwner {
    Candidate(u64),
    Opportunity(u64),
}

/// Supplies the full Sector → Job → Skill catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    async fn fetch_sectors(&self) -> Result<Vec<Sector>, CompetencyError>;
}

/// Loads and stores the flat selection records for an owner.
#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// An owner with nothing saved yet yields an empty list.
    async fn load(&self, owner: SelectionOwner) -> Result<Vec<SectorRecord>, CompetencyError>;

    async fn save(&self, owner: SelectionOwner, records: &[SectorRecord]) -> Result<(), CompetencyError>;
}

/// Supplies backend-computed match percentages for one opportunity.
#[async_trait]
pub trait MatchPercentageProvider: Send + Sync {
    async fn fetch_match_percentages(&self, opportunity_id: u64) -> Result<MatchPercentages, CompetencyError>;
}
