//! Picker contexts — the three places a competency tree is edited.
//!
//! They share one `CompetencyTree`; a context only decides how seniority is
//! persisted and what a newly picked sector starts at.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::selection::records::SectorRecord;
use crate::selection::seniority::{Seniority, SeniorityLevel, SeniorityScale};
use crate::selection::tree::CompetencyTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerContext {
    /// A candidate describing their own profile (0–20 points).
    CandidateProfile,
    /// An organization stating what an opportunity requires (levels 1–5).
    OpportunityRequirement,
    /// Editing the requirements of an existing opportunity (levels 1–5).
    OpportunityEdit,
}

impl PickerContext {
    pub fn scale(self) -> SeniorityScale {
        match self {
            PickerContext::CandidateProfile => SeniorityScale::Points,
            PickerContext::OpportunityRequirement | PickerContext::OpportunityEdit => {
                SeniorityScale::Levels
            }
        }
    }

    /// Starting seniority for a new sector. Level-based contexts snap the
    /// configured value to its level so saving and reloading is stable.
    pub fn default_seniority(self, config: &Config) -> Seniority {
        match self.scale() {
            SeniorityScale::Points => config.default_seniority,
            SeniorityScale::Levels => Seniority::from_level(config.default_seniority.level()),
        }
    }

    pub fn new_tree(self, config: &Config) -> CompetencyTree {
        CompetencyTree::new(self.default_seniority(config))
    }

    /// Builds the editing tree from whatever was persisted for this context.
    pub fn open(self, catalog: &Catalog, records: &[SectorRecord], config: &Config) -> CompetencyTree {
        let tree = CompetencyTree::from_records(catalog, records, self.scale(), self.default_seniority(config));
        info!(
            "Opened {:?} picker with {} of {} persisted sectors",
            self,
            tree.selection().len(),
            records.len()
        );
        tree
    }

    pub fn save(self, tree: &CompetencyTree) -> Vec<SectorRecord> {
        tree.to_records(self.scale())
    }

    /// Seniority as the picker displays it.
    pub fn seniority_label(self, seniority: Seniority) -> String {
        let level: SeniorityLevel = seniority.level();
        match self.scale() {
            SeniorityScale::Points => format!("{} ({}/{})", level, seniority.points(), Seniority::MAX_POINTS),
            SeniorityScale::Levels => level.to_string(),
        }
    }
}
