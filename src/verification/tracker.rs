//! In-flight request bookkeeping shared by verification and reference sessions

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Last id handed out. Shared by every tracker so that a session replaced
/// while its requests are in flight never sees its ids reused.
static LAST_REQUEST_ID: AtomicU64 = AtomicU64::new(0);

/// Identifies one asynchronous request, unique for the life of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl RequestId {
    pub fn next() -> Self {
        RequestId(LAST_REQUEST_ID.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a pending request was asked about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub requested_value: String,
    pub prefix_len: usize,
}

/// What happened to a response once it reached its session
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome<T> {
    /// The response matched the current value and was applied
    Applied(T),
    /// The value changed while the request was in flight
    Stale,
    /// No request with this id is in flight
    Unknown,
}

impl<T> ResponseOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, ResponseOutcome::Applied(_))
    }
}

/// Allocates request ids and remembers which ones are outstanding
#[derive(Debug, Default)]
pub struct RequestTracker {
    in_flight: HashMap<RequestId, PendingRequest>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, requested_value: impl Into<String>, prefix_len: usize) -> RequestId {
        let id = RequestId::next();
        self.in_flight.insert(
            id,
            PendingRequest {
                requested_value: requested_value.into(),
                prefix_len,
            },
        );
        id
    }

    /// Remove and return the pending entry for `id`
    pub fn finish(&mut self, id: RequestId) -> Option<PendingRequest> {
        self.in_flight.remove(&id)
    }

    pub fn is_pending(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.in_flight.len()
    }
}
