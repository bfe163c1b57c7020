//! Flow and step identifiers.
//!
//! - `FlowKind`: which guided flow variant is active
//! - `StepId`: a named position inside a flow
//! - `StepStatus`: a step's position relative to the current one

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// FLOW KIND
// =============================================================================

/// Guided flow variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowKind {
    /// Three linear steps: target, data, contacts.
    Linear,
    /// Four steps with an insights sidebar and a fixed-size preview.
    Dashboard,
    /// Everything on one page; results are fetched on explicit search.
    Single,
    /// Named stages with automatic query on the first ICP exit.
    #[default]
    ThreeStage,
}

impl FlowKind {
    pub const fn all() -> &'static [FlowKind] {
        &[Self::Linear, Self::Dashboard, Self::Single, Self::ThreeStage]
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Dashboard => "dashboard",
            Self::Single => "single",
            Self::ThreeStage => "three-stage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Linear => "Guided Wizard",
            Self::Dashboard => "Discovery Dashboard",
            Self::Single => "Single Flow",
            Self::ThreeStage => "Three Stage Flow",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// STEP ID
// =============================================================================

/// A named position in a guided flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    /// Industry and location target definition.
    Icp,
    /// Industry-specific data fields.
    IndustryColumns,
    /// Department contact fields.
    ContactColumns,
    /// Review of the fetched result set.
    Refine,
    /// Export and save actions.
    Export,
    /// All sections at once.
    Overview,
}

impl StepId {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Icp => "icp",
            Self::IndustryColumns => "industry-columns",
            Self::ContactColumns => "contact-columns",
            Self::Refine => "refine",
            Self::Export => "export",
            Self::Overview => "overview",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// STEP STATUS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

impl StepStatus {
    /// Status of the step at `index` when the pointer is at `current`.
    pub fn relative_to(index: usize, current: usize) -> Self {
        match index.cmp(&current) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&FlowKind::ThreeStage).unwrap();
        assert_eq!(json, "\"three-stage\"");
        assert_eq!(FlowKind::ThreeStage.to_string(), "three-stage");
    }

    #[test]
    fn step_status_relative_to_pointer() {
        assert_eq!(StepStatus::relative_to(0, 1), StepStatus::Completed);
        assert_eq!(StepStatus::relative_to(1, 1), StepStatus::Current);
        assert_eq!(StepStatus::relative_to(2, 1), StepStatus::Upcoming);
    }
}
