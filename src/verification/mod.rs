//! Asynchronous verification against an external formal checker
//!
//! ```text
//! ExpressionContext ──submit──▶ VerificationRequest ──worker──▶ FormalChecker
//!                                                                   │
//!        current buffer value ──▶ on_response ◀──── CheckerReport ──┘
//!                                     │
//!                         Applied / Stale / Unknown
//! ```
//!
//! A response is applied only when the value it was computed for still equals
//! the buffer. Error positions arrive in qualified-text coordinates and are
//! shifted back with [`translate_position`].

mod checker;
mod context;
mod references;
mod result;
mod session;
mod tracker;

pub use checker::{CheckerError, FormalChecker, ProcessChecker, UnavailableChecker};
pub use context::{ConstituentKind, ExpressionContext};
pub use references::{ReferenceRequest, ReferenceResolution, ReferenceSession};
pub use result::{CheckerReport, ReportedError, ValueClass, VerificationResult};
pub use session::{translate_position, VerificationRequest, VerificationSession};
pub use tracker::{PendingRequest, RequestId, RequestTracker, ResponseOutcome};
