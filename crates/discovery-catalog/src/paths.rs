//! Catalog directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the bundled catalog.
pub const CATALOG_ENV_VAR: &str = "DISCOVERY_CATALOG_DIR";

pub const OPTIONS_FILE: &str = "options.toml";
pub const COMPANIES_FILE: &str = "companies.csv";

/// Catalog directory named by `DISCOVERY_CATALOG_DIR`, if set and non-empty.
pub fn catalog_dir_override() -> Option<PathBuf> {
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
