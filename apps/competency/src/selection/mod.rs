// Competency selection: the editable Sector → Job → Skill tree, its seniority
// scale, and the flat record shape it is persisted as.

pub mod models;
pub mod records;
pub mod seniority;
pub mod tree;

pub use models::{JobSelection, SectorSelection, Selection};
pub use records::{JobRecord, SectorRecord};
pub use seniority::{level_of, Seniority, SeniorityLevel, SeniorityScale};
pub use tree::{ActiveSector, Change, CompetencyTree, Rejection, RemovalPreview, MAX_SECTORS};
