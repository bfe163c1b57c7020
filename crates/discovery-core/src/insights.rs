//! Summary figures over a result set.

use std::collections::BTreeSet;

use discovery_model::{
    AVERAGE_COMPANY_SIZE_PLACEHOLDER, CompanyData, Insights, TOP_INDUSTRY_LIMIT,
};

/// Recompute insights for `results` from scratch.
///
/// Top industries are the first distinct industries in result order, not a
/// frequency ranking.
pub fn compute_insights(results: &[CompanyData]) -> Insights {
    let mut top_industries: Vec<String> = Vec::with_capacity(TOP_INDUSTRY_LIMIT);
    for company in results {
        if top_industries.len() == TOP_INDUSTRY_LIMIT {
            break;
        }
        if !top_industries.contains(&company.industry) {
            top_industries.push(company.industry.clone());
        }
    }
    let cities: BTreeSet<&str> = results.iter().map(|c| c.city.as_str()).collect();
    Insights {
        total_companies: results.len(),
        top_industries,
        average_company_size: AVERAGE_COMPANY_SIZE_PLACEHOLDER.to_string(),
        geographic_spread: cities.len(),
    }
}
