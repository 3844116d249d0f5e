//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::editable::Selection;
use crate::grammar::{Keystroke, TokenId};
use crate::model::FocusTarget;
use crate::template::Template;
use crate::verification::{CheckerError, CheckerReport, RequestId};

/// Expression editor messages
#[derive(Debug, Clone)]
pub enum EditorMsg {
    /// Apply a token's insertion rule (toolbar click)
    InsertToken(TokenId),
    /// The host changed the value itself (typing, paste)
    DirectEdit {
        value: String,
        selection: Option<Selection>,
    },
    SetSelection {
        start: usize,
        end: usize,
    },
    Undo,
    Redo,
    /// Submit the current value to the checker
    Verify,
    /// Put the caret on the error at this index
    SelectError(usize),
    NextError,
}

/// Prose field messages
#[derive(Debug, Clone)]
pub enum ProseMsg {
    DirectEdit {
        value: String,
        selection: Option<Selection>,
    },
    Undo,
    Redo,
    ResolveReferences,
}

/// Results of remote calls, sent back by the runtime
#[derive(Debug)]
pub enum VerificationMsg {
    Completed {
        id: RequestId,
        report: CheckerReport,
    },
    Failed {
        id: RequestId,
        error: CheckerError,
    },
    ReferencesResolved {
        id: RequestId,
        payload: serde_json::Value,
    },
    ReferencesFailed {
        id: RequestId,
        error: CheckerError,
    },
}

/// Template instantiation workflow messages
#[derive(Debug, Clone)]
pub enum TemplateMsg {
    Begin(Template),
    SetArgument { alias: String, value: String },
    /// Apply a token to an argument field
    InsertToken { index: usize, token: TokenId },
    /// Replace the expression editor with the instantiated expression
    Commit { alias: String },
    Cancel,
}

/// UI messages (focus, keyboard, notices)
#[derive(Debug, Clone)]
pub enum UiMsg {
    Focus(Option<FocusTarget>),
    /// Raw keystroke for the focused field.
    ///
    /// `update` returns `None` when no chord matched, telling the host to
    /// perform its default character insertion.
    Keystroke(Keystroke),
    DismissNotice(usize),
    ExpireNotices,
}

/// Top-level message type
#[derive(Debug)]
pub enum Msg {
    /// Expression editor messages
    Editor(EditorMsg),
    /// Prose field messages
    Prose(ProseMsg),
    /// Remote call results
    Verification(VerificationMsg),
    /// Template instantiation
    Template(TemplateMsg),
    /// Focus, keyboard, notices
    Ui(UiMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn insert_token(token: TokenId) -> Self {
        Msg::Editor(EditorMsg::InsertToken(token))
    }

    pub fn keystroke(keystroke: Keystroke) -> Self {
        Msg::Ui(UiMsg::Keystroke(keystroke))
    }

    pub fn direct_edit(value: impl Into<String>) -> Self {
        Msg::Editor(EditorMsg::DirectEdit {
            value: value.into(),
            selection: None,
        })
    }

    pub fn verify() -> Self {
        Msg::Editor(EditorMsg::Verify)
    }
}
