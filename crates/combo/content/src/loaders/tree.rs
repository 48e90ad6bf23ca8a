//! Action tree loader.
//!
//! Trees are authored as a nested RON forest and shipped in the flat form,
//! either as RON (reviewable diffs) or bincode (compact). Animation handles
//! are plain strings naming clips in the host engine.

use std::path::Path;

use combo_core::{ActionTree, FlatActionTree};

use crate::loaders::{LoadResult, read_file, write_file};

const DEFAULT_TREE: &str = include_str!("../../data/tree.ron");

/// Tree whose animation handles are clip names.
pub type NamedActionTree = ActionTree<String>;

/// Loader for action trees from RON and bincode files.
pub struct ActionTreeLoader;

impl ActionTreeLoader {
    /// Load an authored (nested) tree from a RON file.
    pub fn load(path: &Path) -> LoadResult<NamedActionTree> {
        let content = read_file(path)?;
        Self::from_ron(&content)
    }

    pub fn from_ron(content: &str) -> LoadResult<NamedActionTree> {
        let tree: NamedActionTree = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse action tree RON: {}", e))?;

        tracing::info!(
            nodes = tree.node_count(),
            branches = tree.branches().count(),
            "loaded action tree"
        );
        Ok(tree)
    }

    /// The tree bundled with the crate.
    pub fn embedded() -> LoadResult<NamedActionTree> {
        Self::from_ron(DEFAULT_TREE)
    }

    /// Load a flat tree stored as RON and rebuild the forest.
    pub fn load_flat_ron(path: &Path) -> LoadResult<NamedActionTree> {
        let content = read_file(path)?;
        let flat: FlatActionTree<String> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse flat tree RON: {}", e))?;

        Self::rebuild(flat, path)
    }

    /// Flatten `tree` and write it as pretty-printed RON.
    pub fn save_flat_ron(tree: &NamedActionTree, path: &Path) -> LoadResult<()> {
        let flat = tree.flatten();
        let content = ron::ser::to_string_pretty(&flat, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to serialize flat tree RON: {}", e))?;

        write_file(path, content)
    }

    /// Load a flat tree stored as bincode and rebuild the forest.
    pub fn load_flat_bincode(path: &Path) -> LoadResult<NamedActionTree> {
        let bytes = std::fs::read(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        let flat: FlatActionTree<String> = bincode::deserialize(&bytes)
            .map_err(|e| anyhow::anyhow!("Failed to decode flat tree bincode: {}", e))?;

        Self::rebuild(flat, path)
    }

    /// Flatten `tree` and write it as bincode.
    pub fn save_flat_bincode(tree: &NamedActionTree, path: &Path) -> LoadResult<()> {
        let bytes = bincode::serialize(&tree.flatten())
            .map_err(|e| anyhow::anyhow!("Failed to encode flat tree bincode: {}", e))?;

        write_file(path, bytes)
    }

    fn rebuild(flat: FlatActionTree<String>, path: &Path) -> LoadResult<NamedActionTree> {
        let tree = flat
            .unflatten()
            .map_err(|e| anyhow::anyhow!("Corrupt flat tree {}: {}", path.display(), e))?;

        tracing::info!(
            nodes = tree.node_count(),
            path = %path.display(),
            "decoded flat action tree"
        );
        Ok(tree)
    }
}
