use std::path::PathBuf;

use clap::Parser;

use crate::{core::catalog::Catalog, prelude::*, tables::build_catalog_table};

#[derive(Parser)]
pub struct CatalogArgs {
    /// TOML file with `[[project]]` tables. The built-in Mars catalog is used when omitted.
    #[clap(long = "catalog", env = "CATALOG_PATH")]
    path: Option<PathBuf>,
}

impl CatalogArgs {
    pub fn load(&self) -> Result<Catalog> {
        match &self.path {
            Some(path) => Catalog::read_from(path),
            None => Ok(Catalog::default()),
        }
    }

    pub fn run(&self) -> Result {
        println!("{}", build_catalog_table(&self.load()?));
        Ok(())
    }
}
