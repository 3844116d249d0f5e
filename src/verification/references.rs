//! Reference resolution for prose fields
//!
//! Mirrors [`super::VerificationSession`] for text-mode fields: the payload is an
//! opaque JSON value and no prefix is involved.

use crate::model::Notice;

use super::checker::CheckerError;
use super::tracker::{RequestId, RequestTracker, ResponseOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRequest {
    pub id: RequestId,
    pub text: String,
}

/// Resolved references for one exact text value
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceResolution {
    pub requested_text: String,
    pub payload: serde_json::Value,
}

#[derive(Debug, Default)]
pub struct ReferenceSession {
    tracker: RequestTracker,
}

impl ReferenceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, text: &str) -> ReferenceRequest {
        let id = self.tracker.begin(text, 0);
        tracing::debug!(target: "verification", %id, "reference resolution submitted");
        ReferenceRequest {
            id,
            text: text.to_string(),
        }
    }

    pub fn on_response(
        &mut self,
        id: RequestId,
        payload: serde_json::Value,
        current_text: &str,
    ) -> ResponseOutcome<ReferenceResolution> {
        let Some(pending) = self.tracker.finish(id) else {
            return ResponseOutcome::Unknown;
        };
        if pending.requested_value != current_text {
            return ResponseOutcome::Stale;
        }
        ResponseOutcome::Applied(ReferenceResolution {
            requested_text: pending.requested_value,
            payload,
        })
    }

    pub fn on_failure(&mut self, id: RequestId, error: &CheckerError) -> Option<Notice> {
        self.tracker.finish(id)?;
        tracing::warn!(target: "verification", %id, %error, "reference resolution failed");
        Some(Notice::error(format!("Reference resolution failed: {error}")))
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.is_pending()
    }
}
