use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number handed out when an update is triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn number(self) -> u64 {
        self.0
    }
}

/// RequestSequencer orders concurrent fetches so that only the response to
/// the most recently triggered update is applied.
///
/// Tickets start at 1 and strictly increase. Late responses carrying an older
/// ticket are discarded by the caller.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier one
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True when no newer ticket has been issued since `ticket`
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// The most recently issued ticket, if any
    pub fn latest(&self) -> Option<Ticket> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            n => Some(Ticket(n)),
        }
    }
}
