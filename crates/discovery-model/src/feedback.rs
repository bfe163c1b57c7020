use serde::{Deserialize, Serialize};

use crate::ids::{ColumnId, CompanyId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Like,
    Dislike,
}

impl FeedbackKind {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Dislike => "dislike",
        }
    }
}

/// Feedback submitted for one result record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackData {
    pub record_id: CompanyId,
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub selected_columns: Vec<ColumnId>,
    pub comment: String,
}
