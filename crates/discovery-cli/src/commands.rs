use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{Instrument, info, info_span};

use discovery_catalog::{LookupProvider, load_default_catalog};
use discovery_cli::{DiscoverReport, discover};
use discovery_core::{DiscoveryConfig, Driver, Session};
use discovery_model::{DEFAULT_LOCATION_RANGE, FlowKind};

use crate::cli::{DiscoverArgs, OutputFormatArg};
use crate::summary::{apply_table_style, print_report};

pub fn run_options() -> Result<()> {
    let catalog = load_default_catalog().context("load catalog")?;

    let mut industries = Table::new();
    industries.set_header(vec!["Industry", "Industry-specific fields"]);
    apply_table_style(&mut industries);
    for industry in catalog.industries() {
        let options = catalog
            .industry_specific_options(industry)
            .with_context(|| format!("options for {industry}"))?;
        industries.add_row(vec![industry.clone(), options.join(", ")]);
    }
    println!("{industries}");

    let mut lookups = Table::new();
    lookups.set_header(vec!["Lookup", "Values"]);
    apply_table_style(&mut lookups);
    let ranges: Vec<String> = catalog
        .location_ranges()
        .iter()
        .map(|range| {
            if range == DEFAULT_LOCATION_RANGE {
                format!("{range} (default)")
            } else {
                range.clone()
            }
        })
        .collect();
    lookups.add_row(vec!["Cities".to_string(), catalog.cities().join(", ")]);
    lookups.add_row(vec!["Location ranges".to_string(), ranges.join(", ")]);
    lookups.add_row(vec![
        "Contact functions".to_string(),
        catalog.contact_functions().join(", "),
    ]);
    println!("{lookups}");

    let mut presets = Table::new();
    presets.set_header(vec!["Preset", "Industries", "Cities"]);
    apply_table_style(&mut presets);
    for preset in catalog.presets() {
        presets.add_row(vec![
            preset.name.clone(),
            preset.industries.join(", "),
            preset.cities.join(", "),
        ]);
    }
    println!("{presets}");
    Ok(())
}

pub fn run_discover(args: &DiscoverArgs, config_path: Option<&Path>) -> Result<DiscoverReport> {
    let config = DiscoveryConfig::load_or_default(config_path).context("load settings")?;
    let catalog = load_default_catalog().context("load catalog")?;
    let kind = args.flow.map_or(config.flow.default_flow, FlowKind::from);
    let session = Session::with_flow(Arc::new(catalog), config, kind);
    let request = args.request();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("start runtime")?;
    let span = info_span!("discover", flow = %kind);
    let report = runtime.block_on(
        async {
            let mut driver = Driver::new(session);
            discover(&mut driver, &request).await
        }
        .instrument(span),
    );
    info!(
        flow = %report.flow,
        results = report.rows.len(),
        blocked = report.blocked.is_some(),
        "discovery finished"
    );
    Ok(report)
}

pub fn print_discover(report: &DiscoverReport, format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Table => print_report(report),
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(report).context("serialize report")?;
            println!("{json}");
        }
    }
    Ok(())
}
