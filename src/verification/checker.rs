//! The formal checker boundary
//!
//! The editor never parses expressions itself; it hands the qualified text to a
//! [`FormalChecker`] and interprets the report. [`ProcessChecker`] talks to an
//! external executable over stdin/stdout using JSON.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use serde::Serialize;
use thiserror::Error;

use crate::config::CheckerConfig;

use super::result::CheckerReport;

/// Why a checker call did not produce a report
#[derive(Debug, Error)]
pub enum CheckerError {
    #[error("no formal checker is configured")]
    Unavailable,

    #[error("failed to start checker `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("checker I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed checker response: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("checker failed ({status}): {message}")]
    Service { status: String, message: String },
}

/// Remote verification and reference resolution
///
/// Calls block; the runtime runs them on worker threads.
pub trait FormalChecker: Send + Sync {
    /// Check a qualified expression (`alias` + separator + expression)
    fn check(&self, qualified: &str) -> Result<CheckerReport, CheckerError>;

    /// Resolve entity references in free text; the payload is opaque to the editor
    fn resolve_references(&self, text: &str) -> Result<serde_json::Value, CheckerError>;
}

/// Stand-in used when no checker is configured
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableChecker;

impl FormalChecker for UnavailableChecker {
    fn check(&self, _qualified: &str) -> Result<CheckerReport, CheckerError> {
        Err(CheckerError::Unavailable)
    }

    fn resolve_references(&self, _text: &str) -> Result<serde_json::Value, CheckerError> {
        Err(CheckerError::Unavailable)
    }
}

#[derive(Serialize)]
struct CheckerRequest<'a> {
    operation: &'a str,
    text: &'a str,
}

/// Spawns one checker process per request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessChecker {
    command: String,
    args: Vec<String>,
}

impl ProcessChecker {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &CheckerConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn run(&self, operation: &str, text: &str) -> Result<Vec<u8>, CheckerError> {
        tracing::debug!(
            target: "verification",
            command = %self.command,
            operation,
            "spawning checker"
        );

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CheckerError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let request = serde_json::to_vec(&CheckerRequest { operation, text })?;
        let stdin = child.stdin.take();

        // Feed stdin while stdout is drained; either pipe can fill first
        let (written, output) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(&request),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("checker stdin writer panicked")));
            (written, output)
        });

        let output = output?;
        if !output.status.success() {
            return Err(CheckerError::Service {
                status: output.status.to_string(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written?;
        Ok(output.stdout)
    }
}

impl FormalChecker for ProcessChecker {
    fn check(&self, qualified: &str) -> Result<CheckerReport, CheckerError> {
        let stdout = self.run("check", qualified)?;
        Ok(serde_json::from_slice(&stdout)?)
    }

    fn resolve_references(&self, text: &str) -> Result<serde_json::Value, CheckerError> {
        let stdout = self.run("resolve", text)?;
        Ok(serde_json::from_slice(&stdout)?)
    }
}
