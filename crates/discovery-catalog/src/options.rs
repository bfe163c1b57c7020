//! Option tables parsed from `options.toml`.

use std::collections::BTreeMap;

use serde::Deserialize;

use discovery_model::{ColumnConfig, Preset};

use crate::error::{CatalogError, Result};

/// Raw option tables as written in the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    pub industries: Vec<String>,
    pub cities: Vec<String>,
    pub location_ranges: Vec<String>,
    pub contact_functions: Vec<String>,
    /// Industry name → industry-specific field labels, in display order.
    pub industry_specific: BTreeMap<String, Vec<String>>,
    pub presets: Vec<Preset>,
    pub columns: Vec<ColumnConfig>,
}

pub fn parse_options(text: &str, origin: &str) -> Result<CatalogOptions> {
    toml::from_str(text).map_err(|source| CatalogError::Toml {
        origin: origin.to_string(),
        source,
    })
}
