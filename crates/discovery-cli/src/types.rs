//! Serializable snapshot of a finished discovery run.

use serde::Serialize;

use discovery_core::{Session, StepDefinition};
use discovery_model::{
    ColumnId, CompanyId, FilterCriteria, FlowKind, Insights, SaveKind, StepId, StepStatus,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepSummary {
    pub id: StepId,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
}

/// Step the walk stopped at, with the unmet condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockedStep {
    pub step: StepId,
    pub requirement: String,
}

impl BlockedStep {
    pub fn at(step: &StepDefinition) -> Self {
        Self {
            step: step.id,
            requirement: step.gate.requirement().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub id: ColumnId,
    pub label: String,
}

/// One company rendered through the selected columns.
#[derive(Debug, Clone, Serialize)]
pub struct RecordRow {
    pub id: CompanyId,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub kind: SaveKind,
    pub title: String,
    pub saved: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoverReport {
    pub flow: FlowKind,
    pub steps: Vec<StepSummary>,
    pub blocked: Option<BlockedStep>,
    /// A fetch completed and the result set is current.
    pub fetched: bool,
    pub criteria: FilterCriteria,
    pub columns: Vec<ColumnSummary>,
    pub rows: Vec<RecordRow>,
    pub insights: Insights,
    pub save: Option<SaveOutcome>,
}

impl DiscoverReport {
    pub fn from_session(
        session: &Session,
        blocked: Option<BlockedStep>,
        save: Option<SaveOutcome>,
    ) -> Self {
        let steps = session
            .flow()
            .step_statuses()
            .into_iter()
            .map(|(step, status)| StepSummary {
                id: step.id,
                title: step.title.to_string(),
                description: step.description.to_string(),
                status,
            })
            .collect();
        let columns: Vec<ColumnSummary> = session
            .selected_columns()
            .map(|column| ColumnSummary {
                id: column.id.clone(),
                label: column.label.clone(),
            })
            .collect();
        let rows = session
            .results()
            .iter()
            .map(|company| RecordRow {
                id: company.id.clone(),
                cells: columns
                    .iter()
                    .map(|column| company.cell(column.id.as_str()).unwrap_or_default())
                    .collect(),
            })
            .collect();

        Self {
            flow: session.flow().kind(),
            steps,
            blocked,
            fetched: session.flow().has_fetched() && !session.is_loading(),
            criteria: session.criteria().clone(),
            columns,
            rows,
            insights: session.insights().clone(),
            save,
        }
    }

    /// The walk stopped before any result set was produced.
    pub fn blocked_before_results(&self) -> bool {
        self.blocked.is_some() && !self.fetched
    }
}
