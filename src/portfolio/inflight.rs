//! Tracking for the single network operation allowed in flight.
//!
//! Every command that reaches the network is issued a [`RequestTicket`].
//! Beginning a new operation supersedes the previous ticket, so a response
//! that arrives for a superseded ticket is recognised as stale and dropped.

/// Kind of network operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Fetch records and the portfolio rating.
    Refresh,
    /// Create or update a record.
    Submit,
    /// Delete a record.
    Delete,
}

impl RequestKind {
    /// Short label for logs and telemetry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::Submit => "submit",
            Self::Delete => "delete",
        }
    }
}

/// Identifies one issued network operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    serial: u64,
    kind: RequestKind,
}

impl RequestTicket {
    /// Returns the kind of operation the ticket was issued for.
    #[must_use]
    pub const fn kind(self) -> RequestKind {
        self.kind
    }
}

/// Issues tickets and remembers which one is current.
#[derive(Debug, Clone, Default)]
pub struct InFlightTracker {
    next_serial: u64,
    current: Option<RequestTicket>,
}

impl InFlightTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket for a new operation, superseding any current one.
    pub fn begin(&mut self, kind: RequestKind) -> RequestTicket {
        if let Some(previous) = self.current {
            tracing::debug!(
                "{} request superseded by {}",
                previous.kind.label(),
                kind.label()
            );
        }
        let ticket = RequestTicket {
            serial: self.next_serial,
            kind,
        };
        self.next_serial = self.next_serial.wrapping_add(1);
        self.current = Some(ticket);
        ticket
    }

    /// Whether an operation is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Kind of the operation in flight, if any.
    #[must_use]
    pub fn current_kind(&self) -> Option<RequestKind> {
        self.current.map(RequestTicket::kind)
    }

    /// Whether `ticket` is the current operation.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current == Some(ticket)
    }

    /// Marks `ticket` finished.
    ///
    /// Returns `false` without changing state when the ticket is stale; the
    /// caller must then discard the response.
    pub fn finish(&mut self, ticket: RequestTicket) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!("discarding stale {} response", ticket.kind.label());
            return false;
        }
        self.current = None;
        true
    }

    /// Abandons whatever is in flight; late responses become stale.
    pub const fn cancel(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_marks_tracker_busy_until_finished() {
        let mut tracker = InFlightTracker::new();
        let ticket = tracker.begin(RequestKind::Refresh);

        assert!(tracker.is_busy());
        assert!(tracker.finish(ticket));
        assert!(!tracker.is_busy());
    }

    #[test]
    fn superseded_ticket_is_stale() {
        let mut tracker = InFlightTracker::new();
        let first = tracker.begin(RequestKind::Submit);
        let second = tracker.begin(RequestKind::Refresh);

        assert!(!tracker.finish(first));
        assert!(tracker.is_busy(), "stale finish must not clear the current ticket");
        assert!(tracker.finish(second));
    }

    #[test]
    fn cancelled_ticket_is_stale() {
        let mut tracker = InFlightTracker::new();
        let ticket = tracker.begin(RequestKind::Delete);

        tracker.cancel();

        assert!(!tracker.is_busy());
        assert!(!tracker.finish(ticket));
    }

    #[test]
    fn ticket_reports_its_kind() {
        let mut tracker = InFlightTracker::new();
        assert_eq!(tracker.current_kind(), None);

        let ticket = tracker.begin(RequestKind::Delete);

        assert_eq!(ticket.kind(), RequestKind::Delete);
        assert_eq!(tracker.current_kind(), Some(RequestKind::Delete));
    }
}
