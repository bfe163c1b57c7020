use serde::{Deserialize, Serialize};

/// Shown for the average company size; the mock source carries no numeric sizes.
pub const AVERAGE_COMPANY_SIZE_PLACEHOLDER: &str = "50-200 employees";

/// Maximum number of entries in [`Insights::top_industries`].
pub const TOP_INDUSTRY_LIMIT: usize = 3;

/// Summary figures over a result set. Always recomputed as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub total_companies: usize,
    pub top_industries: Vec<String>,
    pub average_company_size: String,
    pub geographic_spread: usize,
}

impl Default for Insights {
    fn default() -> Self {
        Self {
            total_companies: 0,
            top_industries: Vec::new(),
            average_company_size: AVERAGE_COMPANY_SIZE_PLACEHOLDER.to_string(),
            geographic_spread: 0,
        }
    }
}

impl Insights {
    pub fn is_empty(&self) -> bool {
        self.total_companies == 0
    }
}
