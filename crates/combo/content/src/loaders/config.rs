//! Character configuration loader.

use std::path::Path;

use combo_core::CharacterConfig;

use crate::loaders::{LoadResult, read_file};

const DEFAULT_CONFIG: &str = include_str!("../../data/character.toml");

/// Loader for character tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing fields fall back to [`CharacterConfig::default`].
    pub fn load(path: &Path) -> LoadResult<CharacterConfig> {
        let content = read_file(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> LoadResult<CharacterConfig> {
        let config: CharacterConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// The tuning bundled with the crate.
    pub fn embedded() -> LoadResult<CharacterConfig> {
        Self::from_toml(DEFAULT_CONFIG)
    }
}
