//! Forward-transition guards.

use serde::{Deserialize, Serialize};

use discovery_model::FilterCriteria;

/// State a gate is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct GateContext<'a> {
    pub criteria: &'a FilterCriteria,
    pub result_count: usize,
}

impl<'a> GateContext<'a> {
    pub fn new(criteria: &'a FilterCriteria, result_count: usize) -> Self {
        Self {
            criteria,
            result_count,
        }
    }
}

/// Predicate that must hold before leaving a step forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// At least one industry and at least one city.
    IcpComplete,
    /// At least one industry-specific option or at least one contact.
    IndustrySpecificOrContacts,
    IndustrySpecific,
    Contacts,
    /// Non-empty result set.
    HasResults,
    Always,
}

impl Gate {
    pub fn is_open(&self, ctx: &GateContext<'_>) -> bool {
        let criteria = ctx.criteria;
        match self {
            Self::IcpComplete => !criteria.industry().is_empty() && !criteria.cities().is_empty(),
            Self::IndustrySpecificOrContacts => {
                !criteria.industry_specific().is_empty() || !criteria.contacts().is_empty()
            }
            Self::IndustrySpecific => !criteria.industry_specific().is_empty(),
            Self::Contacts => !criteria.contacts().is_empty(),
            Self::HasResults => ctx.result_count > 0,
            Self::Always => true,
        }
    }

    /// Short reason shown when the gate is closed.
    pub fn requirement(&self) -> &'static str {
        match self {
            Self::IcpComplete => "select at least one industry and one city",
            Self::IndustrySpecificOrContacts => {
                "select an industry-specific option or a contact function"
            }
            Self::IndustrySpecific => "select at least one industry-specific option",
            Self::Contacts => "select at least one contact function",
            Self::HasResults => "the result set is empty",
            Self::Always => "",
        }
    }
}

/// How the column-selection steps are gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnGatePolicy {
    /// The data step accepts industry-specific options or contacts.
    Either,
    /// Industry-specific options gate the industry stage, contacts gate the
    /// contact stage.
    PerStage,
}

impl ColumnGatePolicy {
    pub fn industry_gate(&self) -> Gate {
        match self {
            Self::Either => Gate::IndustrySpecificOrContacts,
            Self::PerStage => Gate::IndustrySpecific,
        }
    }

    pub fn contact_gate(&self) -> Gate {
        match self {
            Self::Either => Gate::IndustrySpecificOrContacts,
            Self::PerStage => Gate::Contacts,
        }
    }
}
