#![deny(unsafe_code)]

//! Option tables, presets, base columns and the mock company source.

pub mod catalog;
pub mod companies;
pub mod error;
pub mod options;
pub mod paths;
pub mod provider;

use std::path::Path;

use tracing::{debug, info};

pub use crate::catalog::Catalog;
pub use crate::error::{CatalogError, LookupKind, Result};
pub use crate::options::CatalogOptions;
pub use crate::paths::{CATALOG_ENV_VAR, catalog_dir_override};
pub use crate::provider::{LookupProvider, available_industry_options};

const BUNDLED_OPTIONS: &str = include_str!("../data/options.toml");
const BUNDLED_COMPANIES: &str = include_str!("../data/companies.csv");

/// Load the catalog compiled into the binary.
pub fn load_bundled_catalog() -> Result<Catalog> {
    Catalog::from_sources(BUNDLED_OPTIONS, BUNDLED_COMPANIES, "bundled")
}

/// Load `options.toml` and `companies.csv` from a directory.
pub fn load_catalog_dir(dir: &Path) -> Result<Catalog> {
    let options_path = dir.join(paths::OPTIONS_FILE);
    let companies_path = dir.join(paths::COMPANIES_FILE);
    let options = std::fs::read_to_string(&options_path)
        .map_err(|source| CatalogError::io(&options_path, source))?;
    let companies = std::fs::read_to_string(&companies_path)
        .map_err(|source| CatalogError::io(&companies_path, source))?;
    let catalog = Catalog::from_sources(&options, &companies, &dir.display().to_string())?;
    info!(dir = %dir.display(), "loaded catalog from directory");
    Ok(catalog)
}

/// Load the catalog from `DISCOVERY_CATALOG_DIR` when set, else the bundled one.
pub fn load_default_catalog() -> Result<Catalog> {
    match catalog_dir_override() {
        Some(dir) => load_catalog_dir(&dir),
        None => {
            debug!("using bundled catalog");
            load_bundled_catalog()
        }
    }
}
