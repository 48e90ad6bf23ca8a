mod catalog;
mod run;
mod tree;

pub use catalog::Catalog;
pub use run::Run;
pub use tree::Tree;

use std::path::Path;

use anyhow::Result;
use combo_content::{CatalogLoader, ConfigLoader};
use combo_core::{ActionCatalog, CharacterConfig};

/// Catalog from `path`, or the bundled one.
fn load_catalog(path: Option<&Path>) -> Result<ActionCatalog> {
    match path {
        Some(path) => CatalogLoader::load(path),
        None => CatalogLoader::embedded(),
    }
}

/// Character tuning from `path`, or the bundled one.
fn load_config(path: Option<&Path>) -> Result<CharacterConfig> {
    match path {
        Some(path) => ConfigLoader::load(path),
        None => ConfigLoader::embedded(),
    }
}
