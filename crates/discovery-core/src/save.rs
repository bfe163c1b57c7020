//! Save dialog lifecycle: saving, saved, dismissed.

use serde::Serialize;
use tracing::{debug, info};

use discovery_model::SaveKind;

use crate::simulation::{OperationSlot, Ticket, TicketIssuer};

/// What was asked to be saved, captured when the save starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub kind: SaveKind,
    pub record_count: usize,
}

impl SaveRequest {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum SavePhase {
    Closed,
    Saving(SaveRequest),
    Saved(SaveRequest),
}

#[derive(Debug, Default)]
pub struct SaveDialog {
    saving: OperationSlot<SaveRequest>,
    saved: OperationSlot<SaveRequest>,
}

impl SaveDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SavePhase {
        if let Some(request) = self.saving.peek() {
            SavePhase::Saving(*request)
        } else if let Some(request) = self.saved.peek() {
            SavePhase::Saved(*request)
        } else {
            SavePhase::Closed
        }
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_pending()
    }

    /// Text shown in the dialog body for the current phase.
    pub fn message(&self) -> Option<String> {
        match self.phase() {
            SavePhase::Closed => None,
            SavePhase::Saving(request) => Some(request.kind.prompt(request.record_count)),
            SavePhase::Saved(request) => Some(request.kind.confirmation(request.record_count)),
        }
    }

    /// Start a save. Ignored while another save is outstanding.
    pub fn request(&mut self, issuer: &mut TicketIssuer, request: SaveRequest) -> Option<Ticket> {
        if self.saving.is_pending() {
            debug!(kind = ?request.kind, "save already in progress");
            return None;
        }
        self.saved.cancel();
        let ticket = self.saving.begin(issuer, request)?;
        info!(kind = ?request.kind, records = request.record_count, %ticket, "save started");
        Some(ticket)
    }

    /// Finish the save for `ticket` and return the dismissal ticket.
    pub fn complete(&mut self, issuer: &mut TicketIssuer, ticket: Ticket) -> Option<Ticket> {
        let request = self.saving.complete(ticket)?;
        info!(kind = ?request.kind, %ticket, "{}", request.kind.confirmation(request.record_count));
        self.saved.begin(issuer, request)
    }

    /// Close after the confirmation delay, if `ticket` is still current.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        self.saved.complete(ticket).is_some()
    }

    /// Close immediately, cancelling an outstanding save.
    pub fn close(&mut self) {
        if let Some(ticket) = self.saving.cancel() {
            info!(%ticket, "save cancelled");
        }
        self.saved.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(record_count: usize) -> SaveRequest {
        SaveRequest {
            kind: SaveKind::List,
            record_count,
        }
    }

    #[test]
    fn save_runs_through_phases() {
        let mut issuer = TicketIssuer::new();
        let mut dialog = SaveDialog::new();
        assert_eq!(dialog.phase(), SavePhase::Closed);

        let ticket = dialog.request(&mut issuer, list(3)).expect("save ticket");
        assert_eq!(dialog.phase(), SavePhase::Saving(list(3)));
        assert!(dialog.message().is_some_and(|m| m.starts_with("Ready to save 3")));

        let dismiss = dialog.complete(&mut issuer, ticket).expect("dismiss ticket");
        assert_eq!(
            dialog.message().as_deref(),
            Some("3 companies have been saved to your CRM.")
        );
        assert!(dialog.dismiss(dismiss));
        assert_eq!(dialog.phase(), SavePhase::Closed);
    }

    #[test]
    fn request_while_saving_is_ignored() {
        let mut issuer = TicketIssuer::new();
        let mut dialog = SaveDialog::new();
        dialog.request(&mut issuer, list(3)).expect("save ticket");
        assert!(dialog.request(&mut issuer, list(4)).is_none());
        assert_eq!(dialog.phase(), SavePhase::Saving(list(3)));
    }

    #[test]
    fn close_cancels_outstanding_save() {
        let mut issuer = TicketIssuer::new();
        let mut dialog = SaveDialog::new();
        let ticket = dialog.request(&mut issuer, list(3)).expect("save ticket");
        dialog.close();
        assert!(dialog.complete(&mut issuer, ticket).is_none());
        assert_eq!(dialog.phase(), SavePhase::Closed);
    }

    #[test]
    fn stale_dismissal_keeps_newer_confirmation() {
        let mut issuer = TicketIssuer::new();
        let mut dialog = SaveDialog::new();
        let first = dialog.request(&mut issuer, list(1)).expect("save ticket");
        let stale = dialog.complete(&mut issuer, first).expect("dismiss ticket");
        let second = dialog.request(&mut issuer, list(2)).expect("save ticket");
        dialog.complete(&mut issuer, second).expect("dismiss ticket");
        assert!(!dialog.dismiss(stale));
        assert_eq!(dialog.phase(), SavePhase::Saved(list(2)));
    }
}
