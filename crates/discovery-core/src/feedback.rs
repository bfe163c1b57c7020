//! Per-record like/dislike feedback.

use thiserror::Error;

use discovery_model::{ColumnId, CompanyId, FeedbackData, FeedbackKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback needs at least one column")]
    NoColumns,
    #[error("column {0} is not selected")]
    ColumnNotSelected(ColumnId),
}

/// Feedback being composed for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackDraft {
    record_id: CompanyId,
    kind: FeedbackKind,
    columns: Vec<ColumnId>,
    comment: String,
}

impl FeedbackDraft {
    pub fn new(record_id: CompanyId, kind: FeedbackKind) -> Self {
        Self {
            record_id,
            kind,
            columns: Vec::new(),
            comment: String::new(),
        }
    }

    pub fn record_id(&self) -> &CompanyId {
        &self.record_id
    }

    pub fn kind(&self) -> FeedbackKind {
        self.kind
    }

    pub fn columns(&self) -> &[ColumnId] {
        &self.columns
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Toggle `column`, which must be one of `available`.
    pub fn toggle_column(
        &mut self,
        column: &ColumnId,
        available: &[ColumnId],
    ) -> Result<bool, FeedbackError> {
        if !available.contains(column) {
            return Err(FeedbackError::ColumnNotSelected(column.clone()));
        }
        if let Some(position) = self.columns.iter().position(|c| c == column) {
            self.columns.remove(position);
            Ok(false)
        } else {
            self.columns.push(column.clone());
            Ok(true)
        }
    }

    /// Drop chosen columns that are no longer in `available`.
    pub fn retain_columns(&mut self, available: &[ColumnId]) {
        self.columns.retain(|column| available.contains(column));
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.columns.is_empty()
    }

    pub fn submit(self) -> Result<FeedbackData, FeedbackError> {
        if !self.can_submit() {
            return Err(FeedbackError::NoColumns);
        }
        Ok(FeedbackData {
            record_id: self.record_id,
            kind: self.kind,
            selected_columns: self.columns,
            comment: self.comment,
        })
    }
}
