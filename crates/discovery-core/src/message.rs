//! Intents sent to a [`Session`](crate::Session) and the effects it requests.
//!
//! Presentation code emits intents; the session reduces them and returns the
//! side effects a driver must carry out. Timer completions come back as
//! intents carrying the ticket they were issued with.

use discovery_model::{ColumnId, CompanyId, FeedbackKind, FlowKind, SaveKind};

use crate::simulation::Ticket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    // =========================================================================
    // Criteria
    // =========================================================================
    ToggleIndustry(String),
    ToggleCity(String),
    SetLocationRange(String),
    ToggleIndustrySpecific(String),
    ToggleContact(String),
    /// Replace industries and cities with a named preset.
    ApplyPreset(String),

    // =========================================================================
    // Columns
    // =========================================================================
    ToggleColumn(ColumnId),

    // =========================================================================
    // Navigation
    // =========================================================================
    Advance,
    Retreat,
    /// Fetch results without moving.
    Search,
    /// Switch variant; resets the whole session.
    SwitchFlow(FlowKind),
    /// Reset the current variant.
    Restart,

    // =========================================================================
    // Save dialog
    // =========================================================================
    RequestSave(SaveKind),
    CloseSave,

    // =========================================================================
    // Feedback
    // =========================================================================
    OpenFeedback {
        record_id: CompanyId,
        kind: FeedbackKind,
    },
    ToggleFeedbackColumn(ColumnId),
    SetFeedbackComment(String),
    SubmitFeedback,
    CancelFeedback,

    // =========================================================================
    // Timer completions
    // =========================================================================
    FetchCompleted(Ticket),
    SaveCompleted(Ticket),
    SaveDismissed(Ticket),
}

/// Side effect requested by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Run the fetch simulation; answer with [`Intent::FetchCompleted`].
    StartFetch(Ticket),
    /// Run the save simulation; answer with [`Intent::SaveCompleted`].
    StartSave { ticket: Ticket, kind: SaveKind },
    /// Close the save confirmation later; answer with [`Intent::SaveDismissed`].
    ScheduleSaveDismiss(Ticket),
}

impl Effect {
    pub fn ticket(&self) -> Ticket {
        match self {
            Self::StartFetch(ticket)
            | Self::StartSave { ticket, .. }
            | Self::ScheduleSaveDismiss(ticket) => *ticket,
        }
    }

    /// The intent to feed back once the effect's delay has elapsed.
    pub fn completion(&self) -> Intent {
        match *self {
            Self::StartFetch(ticket) => Intent::FetchCompleted(ticket),
            Self::StartSave { ticket, .. } => Intent::SaveCompleted(ticket),
            Self::ScheduleSaveDismiss(ticket) => Intent::SaveDismissed(ticket),
        }
    }
}
