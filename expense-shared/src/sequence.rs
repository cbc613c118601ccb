//! Monotonic request sequencing.
//!
//! A listing view takes a [`RequestTicket`] before each fetch and only applies
//! the response if the ticket is still the latest, so a slow, superseded query
//! cannot overwrite the result of a newer one.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared counter of issued requests. Clones observe the same sequence.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

/// Proof of which request a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding all earlier ones.
    #[must_use]
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` is the most recently issued one.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Run `apply` only for the current ticket. Returns whether it ran.
    pub fn settle<F: FnOnce()>(&self, ticket: RequestTicket, apply: F) -> bool {
        if self.is_current(ticket) {
            apply();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn only_latest_ticket_is_current() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));
        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn stale_response_is_discarded() {
        let sequence = RequestSequence::new();
        let shown = Cell::new("");

        let stale = sequence.begin();
        let fresh = sequence.begin();

        // The newer request lands first, then the older one.
        assert!(sequence.settle(fresh, || shown.set("page 2")));
        assert!(!sequence.settle(stale, || shown.set("page 1")));
        assert_eq!(shown.get(), "page 2");
    }

    #[test]
    fn clones_share_the_counter() {
        let sequence = RequestSequence::new();
        let handle = sequence.clone();
        let ticket = sequence.begin();
        let _newer = handle.begin();
        assert!(!sequence.is_current(ticket));
    }
}
