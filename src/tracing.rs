//! Logging setup and the editor snapshot used to trace state changes
//!
//! Targets: `editor` (edits, focus, chords), `verification` (requests,
//! staleness, checker processes), `message` (every dispatched message).
//!
//! Filter with RUST_LOG:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=editor=trace,verification=debug` - scoped filtering
//! - `RUST_LOG=formula_editor::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! `~/.config/formula-editor/logs/formula-editor.log`, rotated daily, always at debug.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::ExpressionEditor;
use crate::status::ValidityStatus;

/// Install the stderr and log-file subscribers. Console output defaults to `warn`.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "formula-editor.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("warning: file logging disabled: {e}");
            None
        }
    };

    // A second init (tests, embedding hosts) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of expression editor state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    pub len_chars: usize,
    pub selection: (usize, usize),
    pub modified: bool,
    pub status: ValidityStatus,
    pub verifying: bool,
}

impl EditorSnapshot {
    pub fn from_editor(editor: &ExpressionEditor) -> Self {
        let selection = editor.selection();
        Self {
            len_chars: editor.field().len_chars(),
            selection: (selection.start, selection.end),
            modified: editor.is_modified(),
            status: editor.status(),
            verifying: editor.is_verifying(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &EditorSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.len_chars != other.len_chars {
            changes.push(format!("len: {} → {}", self.len_chars, other.len_chars));
        }
        if self.selection != other.selection {
            changes.push(format!(
                "selection: {}..{} → {}..{}",
                self.selection.0, self.selection.1, other.selection.0, other.selection.1
            ));
        }
        if self.modified != other.modified {
            changes.push(format!("modified: {} → {}", self.modified, other.modified));
        }
        if self.status != other.status {
            changes.push(format!("status: {:?} → {:?}", self.status, other.status));
        }
        if self.verifying != other.verifying {
            changes.push(format!("verifying: {} → {}", self.verifying, other.verifying));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
