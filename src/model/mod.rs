//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod editor;
pub mod notice;
pub mod prose;

pub use editor::{ExpressionEditor, KeystrokeOutcome, LocatedError};
pub use notice::{Notice, NoticeLevel};
pub use prose::ProseField;

use crate::config::EditorConfig;
use crate::grammar::{ChordTable, NotationMode};
use crate::template::{InferenceRules, TemplateInstantiation};
use crate::verification::ExpressionContext;

/// Which field receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Expression,
    Prose,
    /// Argument value field of the open template instantiation
    Argument(usize),
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The constituent expression being edited
    pub editor: ExpressionEditor,
    /// Free-text companion field (term, comment)
    pub prose: ProseField,
    /// Open template instantiation workflow, if any
    pub instantiation: Option<TemplateInstantiation>,
    pub chords: ChordTable,
    pub inference_rules: InferenceRules,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Transient notices, oldest first
    pub notices: Vec<Notice>,
    focus: Option<FocusTarget>,
}

impl AppModel {
    pub fn new(context: ExpressionContext, config: EditorConfig, chords: ChordTable) -> Self {
        let limit = config.history_limit;
        Self {
            editor: ExpressionEditor::new(context).with_history_limit(limit),
            prose: ProseField::new("").with_history_limit(limit),
            instantiation: None,
            chords,
            inference_rules: InferenceRules::default(),
            config,
            notices: Vec::new(),
            focus: None,
        }
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    /// Move focus; field focus flags follow
    pub fn set_focus(&mut self, target: Option<FocusTarget>) {
        if self.focus != target {
            tracing::trace!(target: "editor", from = ?self.focus, to = ?target, "focus changed");
        }
        self.focus = target;
        match target {
            Some(FocusTarget::Expression) => {
                self.editor.focus();
                self.prose.blur();
            }
            Some(FocusTarget::Prose) => {
                self.prose.focus();
                self.editor.blur();
            }
            Some(FocusTarget::Argument(_)) | None => {
                self.editor.blur();
                self.prose.blur();
            }
        }
    }

    /// Chord table consulted for the focused field
    pub fn notation_mode(&self) -> NotationMode {
        match self.focus {
            Some(FocusTarget::Expression | FocusTarget::Argument(_)) => NotationMode::Symbolic,
            Some(FocusTarget::Prose) => NotationMode::Text,
            None => self.config.initial_mode,
        }
    }

    pub fn push_notice(&mut self, notice: Notice) {
        tracing::debug!(level = ?notice.level, text = %notice.text, "notice");
        self.notices.push(notice);
    }

    /// Drop expired notices. Returns true if any were removed.
    pub fn expire_notices(&mut self) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| !n.is_expired());
        self.notices.len() != before
    }

    /// Any remote call still outstanding
    pub fn has_pending_requests(&self) -> bool {
        self.editor.is_verifying() || self.prose.is_resolving()
    }
}
