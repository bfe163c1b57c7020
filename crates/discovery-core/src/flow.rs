//! Configurable flow state machine.
//!
//! A [`FlowDefinition`] is a table of steps, each with a gate, plus the rule
//! that decides when leaving the first step starts a fetch. [`FlowMachine`]
//! walks one definition and remembers whether a fetch has happened.

use tracing::{info, warn};

use discovery_model::{FlowKind, StepId, StepStatus};

use crate::filter::ResultPadding;
use crate::gate::{ColumnGatePolicy, Gate, GateContext};

/// When leaving the first step starts a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    /// Never; results are fetched only by an explicit search.
    None,
    /// Every forward transition out of the first step.
    OnEveryAdvance,
    /// Only the first such transition per flow instance.
    FirstAdvanceOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDefinition {
    pub id: StepId,
    pub title: &'static str,
    pub description: &'static str,
    /// Must hold before this step can be left forward.
    pub gate: Gate,
}

impl StepDefinition {
    const fn new(id: StepId, title: &'static str, description: &'static str, gate: Gate) -> Self {
        Self {
            id,
            title,
            description,
            gate,
        }
    }
}

/// Step table of one flow variant. Always holds at least one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowDefinition {
    kind: FlowKind,
    steps: Vec<StepDefinition>,
    fetch: FetchTrigger,
    padding: ResultPadding,
}

impl FlowDefinition {
    /// Build the step table for a flow variant.
    ///
    /// `column_gate` overrides the variant's own gating policy for the
    /// column-selection steps; `padding_target` sizes the padded preview.
    pub fn for_kind(
        kind: FlowKind,
        column_gate: Option<ColumnGatePolicy>,
        padding_target: usize,
    ) -> Self {
        match kind {
            FlowKind::Linear => {
                let policy = column_gate.unwrap_or(ColumnGatePolicy::Either);
                Self {
                    kind,
                    steps: vec![
                        StepDefinition::new(
                            StepId::Icp,
                            "Define Target",
                            "Industry & Location",
                            Gate::IcpComplete,
                        ),
                        StepDefinition::new(
                            StepId::IndustryColumns,
                            "Select Data",
                            "Industry-specific fields",
                            policy.industry_gate(),
                        ),
                        StepDefinition::new(
                            StepId::ContactColumns,
                            "Add Contacts",
                            "Department contacts",
                            Gate::HasResults,
                        ),
                    ],
                    fetch: FetchTrigger::OnEveryAdvance,
                    padding: ResultPadding::None,
                }
            }
            FlowKind::Dashboard => {
                let policy = column_gate.unwrap_or(ColumnGatePolicy::Either);
                Self {
                    kind,
                    steps: vec![
                        StepDefinition::new(
                            StepId::Icp,
                            "Define Target",
                            "Industry & Location",
                            Gate::IcpComplete,
                        ),
                        StepDefinition::new(
                            StepId::IndustryColumns,
                            "Data Discovery",
                            "Choose the data to enrich",
                            policy.industry_gate(),
                        ),
                        StepDefinition::new(
                            StepId::Refine,
                            "Refine Results",
                            "Review the matched companies",
                            Gate::HasResults,
                        ),
                        StepDefinition::new(
                            StepId::Export,
                            "Export & Save",
                            "Save the list or the filter",
                            Gate::Always,
                        ),
                    ],
                    fetch: FetchTrigger::OnEveryAdvance,
                    padding: ResultPadding::Exact(padding_target),
                }
            }
            FlowKind::ThreeStage => {
                let policy = column_gate.unwrap_or(ColumnGatePolicy::PerStage);
                Self {
                    kind,
                    steps: vec![
                        StepDefinition::new(
                            StepId::Icp,
                            "Define ICP",
                            "Set your ideal customer profile",
                            Gate::IcpComplete,
                        ),
                        StepDefinition::new(
                            StepId::IndustryColumns,
                            "Industry Data",
                            "Select industry-specific columns",
                            policy.industry_gate(),
                        ),
                        StepDefinition::new(
                            StepId::ContactColumns,
                            "Contact Details",
                            "Choose contact information",
                            policy.contact_gate(),
                        ),
                    ],
                    fetch: FetchTrigger::FirstAdvanceOnly,
                    padding: ResultPadding::None,
                }
            }
            FlowKind::Single => Self {
                kind,
                steps: vec![StepDefinition::new(
                    StepId::Overview,
                    "Company Discovery",
                    "Define the target, pick data and search",
                    Gate::IcpComplete,
                )],
                fetch: FetchTrigger::None,
                padding: ResultPadding::None,
            },
        }
    }

    pub fn kind(&self) -> FlowKind {
        self.kind
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    pub fn fetch(&self) -> FetchTrigger {
        self.fetch
    }

    /// Post-filter applied to every fetched result set.
    pub fn padding(&self) -> ResultPadding {
        self.padding
    }

    /// Gate of the first step, which is also the search precondition.
    pub fn entry_gate(&self) -> Gate {
        self.steps
            .first()
            .map(|step| step.gate)
            .unwrap_or(Gate::Always)
    }
}

/// Outcome of a forward transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved {
        from: StepId,
        to: StepId,
        /// The transition requests a fetch.
        fetch: bool,
    },
    /// The current step's gate is closed.
    Blocked(StepId),
    /// Already on the last step.
    AtEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowMachine {
    definition: FlowDefinition,
    current: usize,
    fetched: bool,
}

impl FlowMachine {
    pub fn new(definition: FlowDefinition) -> Self {
        Self {
            definition,
            current: 0,
            fetched: false,
        }
    }

    pub fn definition(&self) -> &FlowDefinition {
        &self.definition
    }

    pub fn kind(&self) -> FlowKind {
        self.definition.kind
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &StepDefinition {
        &self.definition.steps[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.definition.steps.len()
    }

    /// Whether a fetch has been requested in this flow instance.
    pub fn has_fetched(&self) -> bool {
        self.fetched
    }

    pub fn mark_fetched(&mut self) {
        self.fetched = true;
    }

    pub fn can_proceed(&self, ctx: &GateContext<'_>) -> bool {
        self.current_step().gate.is_open(ctx)
    }

    pub fn advance(&mut self, ctx: &GateContext<'_>) -> Advance {
        let from = self.current_step().id;
        if self.is_last() {
            return Advance::AtEnd;
        }
        if !self.can_proceed(ctx) {
            warn!(
                flow = %self.kind(),
                step = %from,
                requirement = self.current_step().gate.requirement(),
                "advance blocked"
            );
            return Advance::Blocked(from);
        }
        let fetch = self.is_first()
            && match self.definition.fetch {
                FetchTrigger::None => false,
                FetchTrigger::OnEveryAdvance => true,
                FetchTrigger::FirstAdvanceOnly => !self.fetched,
            };
        if fetch {
            self.fetched = true;
        }
        self.current += 1;
        let to = self.current_step().id;
        info!(flow = %self.kind(), from = %from, to = %to, fetch, "advanced");
        Advance::Moved { from, to, fetch }
    }

    /// Step back without gating. Returns false on the first step.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        info!(flow = %self.kind(), to = %self.current_step().id, "retreated");
        true
    }

    pub fn step_statuses(&self) -> Vec<(&StepDefinition, StepStatus)> {
        self.definition
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| (step, StepStatus::relative_to(index, self.current)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use discovery_model::FilterCriteria;

    use super::*;

    fn machine(kind: FlowKind) -> FlowMachine {
        FlowMachine::new(FlowDefinition::for_kind(kind, None, 10))
    }

    fn icp() -> FilterCriteria {
        FilterCriteria::new()
            .with_industries(["Healthcare"])
            .with_cities(["Boston"])
    }

    #[test]
    fn every_variant_has_steps() {
        for kind in FlowKind::all() {
            let definition = FlowDefinition::for_kind(*kind, None, 10);
            assert!(!definition.steps().is_empty(), "{kind} has no steps");
            assert_eq!(definition.entry_gate(), Gate::IcpComplete);
            let first = definition.steps()[0].id;
            assert_eq!(FlowMachine::new(definition).current_step().id, first);
        }
    }

    #[test]
    fn blocked_until_icp_complete() {
        let mut flow = machine(FlowKind::Linear);
        let criteria = FilterCriteria::new().with_cities(["Austin"]);
        assert_eq!(
            flow.advance(&GateContext::new(&criteria, 0)),
            Advance::Blocked(StepId::Icp)
        );
        assert_eq!(flow.current_index(), 0);
    }

    #[test]
    fn linear_fetches_on_every_exit_from_icp() {
        let mut flow = machine(FlowKind::Linear);
        let criteria = icp();
        let ctx = GateContext::new(&criteria, 0);
        assert!(matches!(flow.advance(&ctx), Advance::Moved { fetch: true, .. }));
        assert!(flow.retreat());
        assert!(matches!(flow.advance(&ctx), Advance::Moved { fetch: true, .. }));
    }

    #[test]
    fn three_stage_fetches_at_most_once() {
        let mut flow = machine(FlowKind::ThreeStage);
        let criteria = icp();
        let ctx = GateContext::new(&criteria, 0);
        assert_eq!(
            flow.advance(&ctx),
            Advance::Moved {
                from: StepId::Icp,
                to: StepId::IndustryColumns,
                fetch: true
            }
        );
        assert!(flow.retreat());
        assert!(matches!(flow.advance(&ctx), Advance::Moved { fetch: false, .. }));
        assert!(flow.has_fetched());
    }

    #[test]
    fn three_stage_gates_each_column_stage_separately() {
        let mut flow = machine(FlowKind::ThreeStage);
        let criteria = icp().with_contacts(["Sales"]);
        let ctx = GateContext::new(&criteria, 3);
        flow.advance(&ctx);
        assert_eq!(flow.advance(&ctx), Advance::Blocked(StepId::IndustryColumns));
    }

    #[test]
    fn gate_override_changes_column_policy() {
        let definition =
            FlowDefinition::for_kind(FlowKind::ThreeStage, Some(ColumnGatePolicy::Either), 10);
        assert_eq!(definition.steps()[1].gate, Gate::IndustrySpecificOrContacts);
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut flow = machine(FlowKind::Dashboard);
        assert!(!flow.retreat());
    }

    #[test]
    fn last_step_reports_end() {
        let mut flow = machine(FlowKind::Single);
        let criteria = icp();
        assert_eq!(flow.advance(&GateContext::new(&criteria, 5)), Advance::AtEnd);
        assert!(!flow.has_fetched());
    }

    #[test]
    fn statuses_follow_pointer() {
        let mut flow = machine(FlowKind::Dashboard);
        let criteria = icp();
        flow.advance(&GateContext::new(&criteria, 0));
        let statuses: Vec<StepStatus> = flow.step_statuses().into_iter().map(|(_, s)| s).collect();
        assert_eq!(
            statuses,
            [
                StepStatus::Completed,
                StepStatus::Current,
                StepStatus::Upcoming,
                StepStatus::Upcoming
            ]
        );
    }
}
