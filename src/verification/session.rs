//! Verification requests and staleness filtering

use crate::model::Notice;

use super::checker::CheckerError;
use super::context::ExpressionContext;
use super::result::{CheckerReport, VerificationResult};
use super::tracker::{RequestId, RequestTracker, ResponseOutcome};

/// Everything a worker needs to run one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub id: RequestId,
    /// Text handed to the checker, prefix included
    pub qualified: String,
    /// Buffer value the request was made for
    pub requested_value: String,
    pub prefix_len: usize,
}

/// Convert a checker position (in qualified text) into a buffer position.
///
/// Positions inside the prefix collapse to 0.
pub fn translate_position(absolute: usize, prefix_len: usize) -> usize {
    absolute.saturating_sub(prefix_len)
}

/// Tracks outstanding checks for one expression field
#[derive(Debug, Default)]
pub struct VerificationSession {
    tracker: RequestTracker,
}

impl VerificationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a check of `context`. Overlapping submissions are allowed.
    pub fn submit(&mut self, context: &ExpressionContext) -> VerificationRequest {
        let prefix_len = context.prefix_len();
        let id = self
            .tracker
            .begin(context.raw_expression.clone(), prefix_len);
        tracing::debug!(target: "verification", %id, alias = %context.alias, "submitted");
        VerificationRequest {
            id,
            qualified: context.qualified(),
            requested_value: context.raw_expression.clone(),
            prefix_len,
        }
    }

    /// Accept a report if it still describes `current_value`
    pub fn on_response(
        &mut self,
        id: RequestId,
        report: CheckerReport,
        current_value: &str,
    ) -> ResponseOutcome<VerificationResult> {
        let Some(pending) = self.tracker.finish(id) else {
            tracing::debug!(target: "verification", %id, "response for unknown request ignored");
            return ResponseOutcome::Unknown;
        };

        if pending.requested_value != current_value {
            tracing::debug!(target: "verification", %id, "stale response discarded");
            return ResponseOutcome::Stale;
        }

        ResponseOutcome::Applied(VerificationResult::from_report(
            pending.requested_value,
            pending.prefix_len,
            report,
        ))
    }

    /// Turn a failed request into a notice; `None` if the id is unknown
    pub fn on_failure(&mut self, id: RequestId, error: &CheckerError) -> Option<Notice> {
        self.tracker.finish(id)?;
        tracing::warn!(target: "verification", %id, %error, "verification failed");
        Some(Notice::error(format!("Verification failed: {error}")))
    }

    pub fn is_pending(&self) -> bool {
        self.tracker.is_pending()
    }
}
