//! Editing session — loads catalog and prior selection from the collaborators,
//! exposes the tree for edits, and writes it back only on explicit save.

use std::sync::Arc;

use tracing::info;

use crate::catalog::{Catalog, SectorId};
use crate::collaborators::{CatalogProvider, SelectionOwner, SelectionStore};
use crate::config::Config;
use crate::errors::Result;
use crate::pickers::PickerContext;
use crate::selection::records::SectorRecord;
use crate::selection::tree::{CompetencyTree, RemovalPreview};

pub struct EditingSession {
    owner: SelectionOwner,
    context: PickerContext,
    catalog: Catalog,
    tree: CompetencyTree,
    store: Arc<dyn SelectionStore>,
}

impl EditingSession {
    pub async fn open(
        catalog_provider: &dyn CatalogProvider,
        store: Arc<dyn SelectionStore>,
        owner: SelectionOwner,
        context: PickerContext,
        config: &Config,
    ) -> Result<Self> {
        let catalog = Catalog::new(catalog_provider.fetch_sectors().await?)?;
        let records = store.load(owner).await?;
        let tree = context.open(&catalog, &records, config);

        info!(
            "Editing session opened for {:?} ({} sectors in catalog)",
            owner,
            catalog.sectors().len()
        );

        Ok(EditingSession {
            owner,
            context,
            catalog,
            tree,
            store,
        })
    }

    pub fn owner(&self) -> SelectionOwner {
        self.owner
    }

    pub fn context(&self) -> PickerContext {
        self.context
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn tree(&self) -> &CompetencyTree {
        &self.tree
    }

    /// Catalog and tree together, since every mutation needs both.
    pub fn edit(&mut self) -> (&Catalog, &mut CompetencyTree) {
        (&self.catalog, &mut self.tree)
    }

    /// Loss summary for confirming a sector removal.
    pub fn removal_preview(&self, sector_id: SectorId) -> Option<RemovalPreview> {
        self.tree.removal_preview(sector_id)
    }

    /// Records as they would be saved right now.
    pub fn records(&self) -> Vec<SectorRecord> {
        self.context.save(&self.tree)
    }

    pub async fn save(&self) -> Result<Vec<SectorRecord>> {
        let records = self.records();
        self.store.save(self.owner, &records).await?;
        info!("Saved {} sectors for {:?}", records.len(), self.owner);
        Ok(records)
    }
}
