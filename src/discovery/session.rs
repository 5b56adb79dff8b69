//! Latest-search-wins bookkeeping.
//!
//! Every search takes a ticket; a result is only accepted if its ticket is
//! still the newest one issued. Older in-flight results are discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    latest: Arc<AtomicU64>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new search, superseding any search still in flight.
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// Returns `result` only if no newer search was started after `ticket`.
    pub fn accept<T>(&self, ticket: SearchTicket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            debug!("Discarding stale search result (ticket {})", ticket.0);
            None
        }
    }
}
