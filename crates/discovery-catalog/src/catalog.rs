#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use discovery_model::{
    ColumnConfig, CompanyData, DEFAULT_LOCATION_RANGE, Preset, contact_functions,
};

use crate::companies::parse_companies;
use crate::error::{CatalogError, Result};
use crate::options::{CatalogOptions, parse_options};

/// Validated lookup tables plus the mock company source.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub(crate) industries: Vec<String>,
    pub(crate) cities: Vec<String>,
    pub(crate) location_ranges: Vec<String>,
    pub(crate) contact_functions: Vec<String>,
    pub(crate) industry_specific: BTreeMap<String, Vec<String>>,
    pub(crate) presets: Vec<Preset>,
    pub(crate) columns: Vec<ColumnConfig>,
    pub(crate) companies: Vec<CompanyData>,
}

impl Catalog {
    /// Parse and validate both source texts.
    ///
    /// `origin` names the sources in error messages.
    pub fn from_sources(options_toml: &str, companies_csv: &str, origin: &str) -> Result<Self> {
        let options = parse_options(options_toml, &format!("{origin}/options.toml"))?;
        let companies = parse_companies(companies_csv, &format!("{origin}/companies.csv"))?;
        Self::new(options, companies)
    }

    pub fn new(options: CatalogOptions, companies: Vec<CompanyData>) -> Result<Self> {
        validate(&options, &companies)?;
        let CatalogOptions {
            industries,
            cities,
            location_ranges,
            contact_functions,
            industry_specific,
            presets,
            columns,
        } = options;
        Ok(Self {
            industries,
            cities,
            location_ranges,
            contact_functions,
            industry_specific,
            presets,
            columns,
            companies,
        })
    }
}

fn ensure_unique(table: &str, values: &[String]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(CatalogError::invalid(format!(
                "duplicate entry {value:?} in {table}"
            )));
        }
    }
    Ok(())
}

fn validate(options: &CatalogOptions, companies: &[CompanyData]) -> Result<()> {
    ensure_unique("industries", &options.industries)?;
    ensure_unique("cities", &options.cities)?;
    ensure_unique("location_ranges", &options.location_ranges)?;
    ensure_unique("contact_functions", &options.contact_functions)?;

    if !options.location_ranges.is_empty()
        && !options
            .location_ranges
            .iter()
            .any(|range| range == DEFAULT_LOCATION_RANGE)
    {
        return Err(CatalogError::invalid(format!(
            "location_ranges must include the default {DEFAULT_LOCATION_RANGE:?}"
        )));
    }

    let expected: BTreeSet<&str> = contact_functions().collect();
    let actual: BTreeSet<&str> = options
        .contact_functions
        .iter()
        .map(String::as_str)
        .collect();
    if !options.contact_functions.is_empty() && expected != actual {
        return Err(CatalogError::invalid(
            "contact_functions must match the contact column table",
        ));
    }

    for (industry, fields) in &options.industry_specific {
        if !options.industries.contains(industry) {
            return Err(CatalogError::invalid(format!(
                "industry_specific references unknown industry {industry:?}"
            )));
        }
        ensure_unique(&format!("industry_specific.{industry}"), fields)?;
    }

    for preset in &options.presets {
        if let Some(industry) = preset
            .industries
            .iter()
            .find(|industry| !options.industries.contains(industry))
        {
            return Err(CatalogError::invalid(format!(
                "preset {:?} references unknown industry {industry:?}",
                preset.name
            )));
        }
        if let Some(city) = preset
            .cities
            .iter()
            .find(|city| !options.cities.contains(city))
        {
            return Err(CatalogError::invalid(format!(
                "preset {:?} references unknown city {city:?}",
                preset.name
            )));
        }
    }

    let mut column_ids = BTreeSet::new();
    for column in &options.columns {
        if !column_ids.insert(column.id.as_str()) {
            return Err(CatalogError::invalid(format!(
                "duplicate column id {}",
                column.id
            )));
        }
    }

    let mut company_ids = BTreeSet::new();
    for company in companies {
        if !company_ids.insert(company.id.as_str()) {
            return Err(CatalogError::invalid(format!(
                "duplicate company id {}",
                company.id
            )));
        }
    }
    Ok(())
}
