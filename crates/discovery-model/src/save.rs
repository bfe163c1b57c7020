use serde::{Deserialize, Serialize};

/// What a simulated save persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveKind {
    /// The current result list, pushed to the CRM.
    List,
    /// The filter configuration, kept for reuse.
    Filter,
}

impl SaveKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::List => "Save List to CRM",
            Self::Filter => "Save Filter Group",
        }
    }

    pub fn prompt(&self, record_count: usize) -> String {
        match self {
            Self::List => format!(
                "Ready to save {record_count} companies to your CRM? This will create new contacts and update existing ones."
            ),
            Self::Filter => "Save this filter configuration for future use.".to_string(),
        }
    }

    pub fn confirmation(&self, record_count: usize) -> String {
        match self {
            Self::List => format!("{record_count} companies have been saved to your CRM."),
            Self::Filter => "Filter group has been saved for future use.".to_string(),
        }
    }
}
