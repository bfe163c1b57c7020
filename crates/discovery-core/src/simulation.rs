//! Pending simulated operations.
//!
//! Each started operation gets a fresh [`Ticket`]. A completion is applied
//! only if its ticket still matches the slot, so cancelling is just clearing
//! the slot: a timer that fires later finds nothing to complete.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one started operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out strictly increasing tickets.
#[derive(Debug, Default)]
pub struct TicketIssuer {
    last: u64,
}

impl TicketIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.last += 1;
        Ticket(self.last)
    }
}

/// At most one outstanding operation, carrying the payload captured at start.
#[derive(Debug)]
pub struct OperationSlot<T> {
    pending: Option<(Ticket, T)>,
}

impl<T> Default for OperationSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> OperationSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Payload of the outstanding operation.
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, payload)| payload)
    }

    /// Start an operation unless one is already outstanding.
    pub fn begin(&mut self, issuer: &mut TicketIssuer, payload: T) -> Option<Ticket> {
        if self.pending.is_some() {
            return None;
        }
        let ticket = issuer.issue();
        self.pending = Some((ticket, payload));
        Some(ticket)
    }

    /// Take the payload if `ticket` is the outstanding one.
    pub fn complete(&mut self, ticket: Ticket) -> Option<T> {
        match &self.pending {
            Some((current, _)) if *current == ticket => {
                self.pending.take().map(|(_, payload)| payload)
            }
            _ => None,
        }
    }

    /// Drop the outstanding operation. Returns its ticket, if any.
    pub fn cancel(&mut self) -> Option<Ticket> {
        self.pending.take().map(|(ticket, _)| ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let mut issuer = TicketIssuer::new();
        let first = issuer.issue();
        let second = issuer.issue();
        assert!(second > first);
        assert_eq!(first.to_string(), "#1");
    }

    #[test]
    fn second_begin_is_refused_while_pending() {
        let mut issuer = TicketIssuer::new();
        let mut slot = OperationSlot::new();
        let ticket = slot.begin(&mut issuer, "a").expect("first begin");
        assert!(slot.begin(&mut issuer, "b").is_none());
        assert_eq!(slot.complete(ticket), Some("a"));
        assert!(!slot.is_pending());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut issuer = TicketIssuer::new();
        let mut slot = OperationSlot::new();
        let stale = slot.begin(&mut issuer, 1).expect("begin");
        assert_eq!(slot.cancel(), Some(stale));
        let fresh = slot.begin(&mut issuer, 2).expect("begin");
        assert_eq!(slot.complete(stale), None);
        assert!(slot.is_pending());
        assert_eq!(slot.complete(fresh), Some(2));
    }
}
