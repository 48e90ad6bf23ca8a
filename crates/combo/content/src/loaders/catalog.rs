//! Action catalog loader.
//!
//! A catalog file is a RON list of chains. File order is significant: the
//! earliest chain wins when several match the same input.

use std::path::Path;

use combo_core::{ActionCatalog, ActionChain};

use crate::loaders::{LoadResult, read_file};

const DEFAULT_CATALOG: &str = include_str!("../../data/chains.ron");

/// Loader for action catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, does not parse, or contains a chain
    /// without steps.
    pub fn load(path: &Path) -> LoadResult<ActionCatalog> {
        let content = read_file(path)?;
        Self::from_ron(&content)
            .map_err(|e| anyhow::anyhow!("Invalid catalog {}: {}", path.display(), e))
    }

    /// Parse and validate a catalog from RON text.
    pub fn from_ron(content: &str) -> LoadResult<ActionCatalog> {
        let chains: Vec<ActionChain> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;
        let catalog = ActionCatalog::new(chains)?;

        tracing::info!(chains = catalog.len(), "loaded action catalog");
        Ok(catalog)
    }

    /// The catalog bundled with the crate.
    pub fn embedded() -> LoadResult<ActionCatalog> {
        Self::from_ron(DEFAULT_CATALOG)
    }
}
