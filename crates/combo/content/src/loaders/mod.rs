//! Content loaders for reading combo data from files.

pub mod catalog;
pub mod config;
pub mod tree;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;
pub use tree::{ActionTreeLoader, NamedActionTree};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Helper function to write file contents.
pub(crate) fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> LoadResult<()> {
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
}
