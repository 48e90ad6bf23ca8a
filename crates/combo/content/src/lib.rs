//! Designer data for the combo engine and the loaders that read it.
//!
//! - Action catalogs (ordered chain lists, RON)
//! - Action trees (authored form in RON, flat form in RON or bincode)
//! - Character tuning (TOML)
//!
//! Every loader also ships an embedded default so tools run without any data
//! directory. All loaders deserialize `combo-core` types directly.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ActionTreeLoader, CatalogLoader, ConfigLoader, LoadResult, NamedActionTree};
