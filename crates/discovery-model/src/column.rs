use serde::{Deserialize, Serialize};

use crate::ids::ColumnId;

/// Grouping of a column in the result table.
///
/// Only `Industry` and `Contact` columns follow the filter criteria
/// automatically; `Basic` columns change only on explicit user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnCategory {
    Basic,
    Industry,
    Contact,
}

impl ColumnCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Industry => "Industry",
            Self::Contact => "Contact",
        }
    }
}

/// One displayable/exportable data column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub id: ColumnId,
    pub label: String,
    pub category: ColumnCategory,
    #[serde(default)]
    pub selected: bool,
}

impl ColumnConfig {
    /// True for columns whose selection is derived from the criteria.
    pub fn is_derived(&self) -> bool {
        self.category != ColumnCategory::Basic
    }
}
