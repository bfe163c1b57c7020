//! The lookup seam between the discovery core and its static tables.

use tracing::debug;

use discovery_model::{ColumnConfig, CompanyData, Preset};

use crate::catalog::Catalog;
use crate::error::{CatalogError, LookupKind, Result};

/// Read-only access to the option tables and the mock company source.
///
/// All lists are ordered as they should be displayed.
pub trait LookupProvider: Send + Sync {
    fn industries(&self) -> &[String];

    fn cities(&self) -> &[String];

    fn location_ranges(&self) -> &[String];

    fn contact_functions(&self) -> &[String];

    /// Industry-specific field labels offered for one industry.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the industry has no entry.
    fn industry_specific_options(&self, industry: &str) -> Result<&[String]>;

    fn presets(&self) -> &[Preset];

    /// Base column configuration, before any derivation.
    fn base_columns(&self) -> &[ColumnConfig];

    fn companies(&self) -> &[CompanyData];

    fn preset(&self, name: &str) -> Result<&Preset> {
        self.presets()
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| CatalogError::not_found(LookupKind::Preset, name))
    }

    /// Check that `name` is an entry of the given table.
    fn require(&self, kind: LookupKind, name: &str) -> Result<()> {
        let table = match kind {
            LookupKind::Industry => self.industries(),
            LookupKind::City => self.cities(),
            LookupKind::LocationRange => self.location_ranges(),
            LookupKind::ContactFunction => self.contact_functions(),
            LookupKind::Preset => return self.preset(name).map(|_| ()),
            LookupKind::Column => {
                return if self.base_columns().iter().any(|c| c.id.as_str() == name) {
                    Ok(())
                } else {
                    Err(CatalogError::not_found(kind, name))
                };
            }
            LookupKind::IndustrySpecific => {
                return if self
                    .industries()
                    .iter()
                    .filter_map(|industry| self.industry_specific_options(industry).ok())
                    .any(|options| options.iter().any(|option| option == name))
                {
                    Ok(())
                } else {
                    Err(CatalogError::not_found(kind, name))
                };
            }
        };
        if table.iter().any(|entry| entry == name) {
            Ok(())
        } else {
            Err(CatalogError::not_found(kind, name))
        }
    }
}

impl LookupProvider for Catalog {
    fn industries(&self) -> &[String] {
        &self.industries
    }

    fn cities(&self) -> &[String] {
        &self.cities
    }

    fn location_ranges(&self) -> &[String] {
        &self.location_ranges
    }

    fn contact_functions(&self) -> &[String] {
        &self.contact_functions
    }

    fn industry_specific_options(&self, industry: &str) -> Result<&[String]> {
        self.industry_specific
            .get(industry)
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::not_found(LookupKind::Industry, industry))
    }

    fn presets(&self) -> &[Preset] {
        &self.presets
    }

    fn base_columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    fn companies(&self) -> &[CompanyData] {
        &self.companies
    }
}

/// Union of the industry-specific options of every selected industry.
///
/// Keeps first-occurrence order and drops duplicates. Industries without an
/// entry contribute nothing.
pub fn available_industry_options<'a, P, I>(provider: &P, industries: I) -> Vec<String>
where
    P: LookupProvider + ?Sized,
    I: IntoIterator<Item = &'a String>,
{
    let mut options: Vec<String> = Vec::new();
    for industry in industries {
        match provider.industry_specific_options(industry) {
            Ok(fields) => {
                for field in fields {
                    if !options.contains(field) {
                        options.push(field.clone());
                    }
                }
            }
            Err(error) => debug!(%industry, %error, "no industry-specific options"),
        }
    }
    options
}
