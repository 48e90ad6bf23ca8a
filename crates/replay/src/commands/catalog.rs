//! List the chains of an action catalog.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::load_catalog;

/// List the chains of an action catalog
#[derive(Parser)]
pub struct Catalog {
    /// Action catalog (RON); defaults to the bundled catalog
    #[arg(value_name = "FILE")]
    path: Option<PathBuf>,
}

impl Catalog {
    pub fn execute(self) -> Result<()> {
        let catalog = load_catalog(self.path.as_deref())?;

        for (index, chain) in catalog.chains().iter().enumerate() {
            println!("{index:>3}  {chain}  [{:?}]", chain.start_flags);
        }
        Ok(())
    }
}
