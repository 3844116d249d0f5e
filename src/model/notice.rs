//! User-facing notices for non-fatal failures

use std::time::{Duration, Instant};

/// How prominently a notice should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A transient message shown to the user
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    /// When this notice expires
    pub expires_at: Instant,
}

impl Notice {
    /// Default display time
    pub const DURATION: Duration = Duration::from_secs(5);

    /// Create a new notice with the given duration
    pub fn new(level: NoticeLevel, text: impl Into<String>, duration: Duration) -> Self {
        Self {
            level,
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, text, Self::DURATION)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, text, Self::DURATION)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text, Self::DURATION)
    }

    /// Check if this notice has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
