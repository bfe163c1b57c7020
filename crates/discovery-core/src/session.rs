//! Session controller.
//!
//! A [`Session`] owns all discovery state and is the only writer to it.
//! [`Session::update`] reduces one [`Intent`] and returns the [`Effect`]s a
//! driver has to run; nothing here sleeps or spawns.

use std::sync::Arc;

use tracing::{debug, info, warn};

use discovery_catalog::{LookupKind, LookupProvider, available_industry_options};
use discovery_model::{
    ColumnConfig, ColumnId, CompanyData, CompanyId, FeedbackData, FeedbackKind, FilterCriteria,
    FlowKind, Insights, SaveKind,
};

use crate::columns::{derive_column_selection, selected_columns, toggle_column};
use crate::config::DiscoveryConfig;
use crate::feedback::FeedbackDraft;
use crate::filter::compute_result_set;
use crate::flow::{Advance, FlowMachine, StepDefinition};
use crate::gate::GateContext;
use crate::insights::compute_insights;
use crate::message::{Effect, Intent};
use crate::save::{SaveDialog, SaveRequest};
use crate::simulation::{OperationSlot, Ticket, TicketIssuer};

pub struct Session {
    provider: Arc<dyn LookupProvider>,
    config: DiscoveryConfig,
    flow: FlowMachine,
    criteria: FilterCriteria,
    columns: Vec<ColumnConfig>,
    results: Vec<CompanyData>,
    insights: Insights,
    /// Criteria captured when the outstanding fetch started.
    fetch: OperationSlot<FilterCriteria>,
    save: SaveDialog,
    feedback_draft: Option<FeedbackDraft>,
    feedback_log: Vec<FeedbackData>,
    tickets: TicketIssuer,
}

impl Session {
    /// Start a session on the configured default flow.
    pub fn new(provider: Arc<dyn LookupProvider>, config: DiscoveryConfig) -> Self {
        let kind = config.flow.default_flow;
        Self::with_flow(provider, config, kind)
    }

    pub fn with_flow(
        provider: Arc<dyn LookupProvider>,
        config: DiscoveryConfig,
        kind: FlowKind,
    ) -> Self {
        let flow = FlowMachine::new(config.flow_definition(kind));
        let columns = provider.base_columns().to_vec();
        info!(flow = %kind, "session started");
        Self {
            provider,
            config,
            flow,
            criteria: FilterCriteria::default(),
            columns,
            results: Vec::new(),
            insights: Insights::default(),
            fetch: OperationSlot::new(),
            save: SaveDialog::new(),
            feedback_draft: None,
            feedback_log: Vec::new(),
            tickets: TicketIssuer::new(),
        }
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn provider(&self) -> &dyn LookupProvider {
        self.provider.as_ref()
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn flow(&self) -> &FlowMachine {
        &self.flow
    }

    pub fn current_step(&self) -> &StepDefinition {
        self.flow.current_step()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn columns(&self) -> &[ColumnConfig] {
        &self.columns
    }

    pub fn selected_columns(&self) -> impl Iterator<Item = &ColumnConfig> {
        selected_columns(&self.columns)
    }

    pub fn results(&self) -> &[CompanyData] {
        &self.results
    }

    pub fn insights(&self) -> &Insights {
        &self.insights
    }

    /// True while a fetch simulation is outstanding.
    pub fn is_loading(&self) -> bool {
        self.fetch.is_pending()
    }

    pub fn can_proceed(&self) -> bool {
        self.flow.can_proceed(&self.gate_context())
    }

    pub fn save_dialog(&self) -> &SaveDialog {
        &self.save
    }

    pub fn feedback_draft(&self) -> Option<&FeedbackDraft> {
        self.feedback_draft.as_ref()
    }

    pub fn feedback_log(&self) -> &[FeedbackData] {
        &self.feedback_log
    }

    /// Industry-specific options offered for the selected industries.
    pub fn available_industry_options(&self) -> Vec<String> {
        available_industry_options(self.provider.as_ref(), self.criteria.industry())
    }

    fn gate_context(&self) -> GateContext<'_> {
        GateContext::new(&self.criteria, self.results.len())
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Apply one intent and return the effects to run.
    pub fn update(&mut self, intent: Intent) -> Vec<Effect> {
        debug!(?intent, step = %self.current_step().id, "intent");
        match intent {
            Intent::ToggleIndustry(industry) => {
                if self.known(LookupKind::Industry, &industry) {
                    self.criteria.toggle_industry(&industry);
                    self.refresh_columns();
                }
                Vec::new()
            }
            Intent::ToggleCity(city) => {
                if self.known(LookupKind::City, &city) {
                    self.criteria.toggle_city(&city);
                }
                Vec::new()
            }
            Intent::SetLocationRange(range) => {
                if self.known(LookupKind::LocationRange, &range) {
                    self.criteria.set_location_range(range);
                }
                Vec::new()
            }
            Intent::ToggleIndustrySpecific(option) => {
                if self.available_industry_options().contains(&option) {
                    self.criteria.toggle_industry_specific(&option);
                    self.refresh_columns();
                } else {
                    warn!(%option, "option not offered for the selected industries");
                }
                Vec::new()
            }
            Intent::ToggleContact(function) => {
                if self.known(LookupKind::ContactFunction, &function) {
                    self.criteria.toggle_contact(&function);
                    self.refresh_columns();
                }
                Vec::new()
            }
            Intent::ApplyPreset(name) => {
                match self.provider.preset(&name) {
                    Ok(preset) => {
                        self.criteria.apply_preset(preset);
                        info!(preset = %name, "preset applied");
                        self.refresh_columns();
                    }
                    Err(error) => warn!(%error, "preset ignored"),
                }
                Vec::new()
            }
            Intent::ToggleColumn(id) => {
                if !toggle_column(&mut self.columns, &id) {
                    warn!(column = %id, "unknown column");
                }
                Vec::new()
            }
            Intent::Advance => self.advance(),
            Intent::Retreat => {
                self.flow.retreat();
                Vec::new()
            }
            Intent::Search => self.search(),
            Intent::SwitchFlow(kind) => {
                self.reset(kind);
                Vec::new()
            }
            Intent::Restart => {
                self.reset(self.flow.kind());
                Vec::new()
            }
            Intent::RequestSave(kind) => self.request_save(kind),
            Intent::CloseSave => {
                self.save.close();
                Vec::new()
            }
            Intent::OpenFeedback { record_id, kind } => {
                self.open_feedback(record_id, kind);
                Vec::new()
            }
            Intent::ToggleFeedbackColumn(id) => {
                self.toggle_feedback_column(&id);
                Vec::new()
            }
            Intent::SetFeedbackComment(comment) => {
                match self.feedback_draft.as_mut() {
                    Some(draft) => draft.set_comment(comment),
                    None => debug!("no feedback draft open"),
                }
                Vec::new()
            }
            Intent::SubmitFeedback => {
                self.submit_feedback();
                Vec::new()
            }
            Intent::CancelFeedback => {
                self.feedback_draft = None;
                Vec::new()
            }
            Intent::FetchCompleted(ticket) => {
                self.finish_fetch(ticket);
                Vec::new()
            }
            Intent::SaveCompleted(ticket) => self
                .save
                .complete(&mut self.tickets, ticket)
                .map(Effect::ScheduleSaveDismiss)
                .into_iter()
                .collect(),
            Intent::SaveDismissed(ticket) => {
                if self.save.dismiss(ticket) {
                    debug!(%ticket, "save dialog dismissed");
                }
                Vec::new()
            }
        }
    }

    fn known(&self, kind: LookupKind, name: &str) -> bool {
        match self.provider.require(kind, name) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "intent ignored");
                false
            }
        }
    }

    fn refresh_columns(&mut self) {
        self.columns = derive_column_selection(&self.columns, &self.criteria);
    }

    fn advance(&mut self) -> Vec<Effect> {
        let ctx = GateContext::new(&self.criteria, self.results.len());
        match self.flow.advance(&ctx) {
            Advance::Moved { fetch: true, .. } => self.start_fetch().into_iter().collect(),
            Advance::Moved { .. } | Advance::Blocked(_) => Vec::new(),
            Advance::AtEnd => {
                debug!(step = %self.current_step().id, "already on the last step");
                Vec::new()
            }
        }
    }

    fn search(&mut self) -> Vec<Effect> {
        let gate = self.flow.definition().entry_gate();
        if !gate.is_open(&self.gate_context()) {
            warn!(requirement = gate.requirement(), "search blocked");
            return Vec::new();
        }
        let effect = self.start_fetch();
        if effect.is_some() {
            self.flow.mark_fetched();
        }
        effect.into_iter().collect()
    }

    fn start_fetch(&mut self) -> Option<Effect> {
        match self.fetch.begin(&mut self.tickets, self.criteria.clone()) {
            Some(ticket) => {
                info!(%ticket, flow = %self.flow.kind(), "fetch started");
                Some(Effect::StartFetch(ticket))
            }
            None => {
                debug!("fetch already outstanding");
                None
            }
        }
    }

    fn finish_fetch(&mut self, ticket: Ticket) {
        let Some(criteria) = self.fetch.complete(ticket) else {
            debug!(%ticket, "stale fetch completion ignored");
            return;
        };
        let source = self.provider.companies();
        let matched = compute_result_set(&criteria, source);
        let matched_count = matched.len();
        self.results = self.flow.definition().padding().apply(matched, source);
        self.insights = compute_insights(&self.results);
        info!(
            %ticket,
            matched = matched_count,
            shown = self.results.len(),
            "fetch completed"
        );
    }

    /// Drop the outstanding fetch and save so no flag waits on a timer.
    ///
    /// Completions for the dropped tickets are ignored if they still arrive.
    pub fn cancel_pending(&mut self) {
        if let Some(ticket) = self.fetch.cancel() {
            info!(%ticket, "fetch cancelled");
        }
        self.save.close();
    }

    fn reset(&mut self, kind: FlowKind) {
        self.cancel_pending();
        self.feedback_draft = None;
        self.flow = FlowMachine::new(self.config.flow_definition(kind));
        self.criteria = FilterCriteria::default();
        self.columns = self.provider.base_columns().to_vec();
        self.results.clear();
        self.insights = Insights::default();
        info!(flow = %kind, "session reset");
    }

    fn request_save(&mut self, kind: SaveKind) -> Vec<Effect> {
        let request = SaveRequest {
            kind,
            record_count: self.results.len(),
        };
        self.save
            .request(&mut self.tickets, request)
            .map(|ticket| Effect::StartSave { ticket, kind })
            .into_iter()
            .collect()
    }

    fn open_feedback(&mut self, record_id: CompanyId, kind: FeedbackKind) {
        if !self.results.iter().any(|company| company.id == record_id) {
            warn!(record = %record_id, "feedback for a record not in the results");
            return;
        }
        debug!(record = %record_id, kind = kind.verb(), "feedback opened");
        self.feedback_draft = Some(FeedbackDraft::new(record_id, kind));
    }

    fn selected_column_ids(&self) -> Vec<ColumnId> {
        selected_columns(&self.columns)
            .map(|column| column.id.clone())
            .collect()
    }

    fn toggle_feedback_column(&mut self, id: &ColumnId) {
        let available = self.selected_column_ids();
        let Some(draft) = self.feedback_draft.as_mut() else {
            debug!("no feedback draft open");
            return;
        };
        if let Err(error) = draft.toggle_column(id, &available) {
            warn!(%error, "feedback column ignored");
        }
    }

    fn submit_feedback(&mut self) {
        let available = self.selected_column_ids();
        if let Some(draft) = self.feedback_draft.as_mut() {
            draft.retain_columns(&available);
        }
        match self.feedback_draft.take() {
            Some(draft) if draft.can_submit() => match draft.submit() {
                Ok(feedback) => {
                    info!(
                        record = %feedback.record_id,
                        kind = feedback.kind.verb(),
                        columns = feedback.selected_columns.len(),
                        comment = %feedback.comment,
                        "feedback submitted"
                    );
                    self.feedback_log.push(feedback);
                }
                Err(error) => warn!(%error, "feedback rejected"),
            },
            Some(draft) => {
                warn!("feedback needs at least one column");
                self.feedback_draft = Some(draft);
            }
            None => debug!("no feedback draft open"),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("flow", &self.flow.kind())
            .field("step", &self.current_step().id)
            .field("criteria", &self.criteria)
            .field("results", &self.results.len())
            .field("loading", &self.is_loading())
            .finish_non_exhaustive()
    }
}
