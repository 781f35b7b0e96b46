use std::path::PathBuf;
use std::sync::Arc;

use crate::repository::{CatalogSource, Storage, UserStateRepository};

mod catalog_file;
mod mapping;
mod state_file;

pub use catalog_file::{JsonCatalogFile, parse_catalog};
pub use state_file::JsonStateFile;

impl Storage {
    /// Build a `Storage` backed by JSON documents on disk.
    ///
    /// Nothing is read here; the catalog is loaded when a session starts and
    /// the state file may not exist yet.
    #[must_use]
    pub fn json(catalog_path: impl Into<PathBuf>, state_path: impl Into<PathBuf>) -> Self {
        let state: Arc<dyn UserStateRepository> = Arc::new(JsonStateFile::new(state_path));
        let catalog: Arc<dyn CatalogSource> = Arc::new(JsonCatalogFile::new(catalog_path));
        Self { state, catalog }
    }
}
