//! Expression editor: one symbolic-mode field bound to a schema constituent

use crate::editable::{EditableState, Selection, TextBufferMut};
use crate::grammar::{
    rule_for, ChordAction, ChordTable, EditorCommand, Keystroke, NotationMode, TokenId,
};
use crate::status::{self, ValidityStatus};
use crate::verification::{
    translate_position, CheckerError, CheckerReport, ConstituentKind, ExpressionContext,
    RequestId, ResponseOutcome, VerificationRequest, VerificationResult, VerificationSession,
};

use super::notice::Notice;

/// What a keystroke did to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeystrokeOutcome {
    /// No chord matched; the host should insert the character normally
    PassThrough,
    /// A token, literal or local edit command changed the field
    Applied,
    /// Intercepted, but the field did not change (nothing to undo)
    Handled,
    /// A chord asked for a command the field cannot run by itself
    Command(EditorCommand),
}

impl KeystrokeOutcome {
    /// The host must suppress its default handling
    pub fn is_intercepted(self) -> bool {
        !matches!(self, KeystrokeOutcome::PassThrough)
    }
}

fn changed(did_change: bool) -> KeystrokeOutcome {
    if did_change {
        KeystrokeOutcome::Applied
    } else {
        KeystrokeOutcome::Handled
    }
}

/// Apply a resolved chord action to a field
pub(crate) fn apply_chord<B: TextBufferMut>(
    field: &mut EditableState<B>,
    action: &ChordAction,
) -> KeystrokeOutcome {
    match action {
        ChordAction::Token(token) => {
            rule_for(*token).apply(field);
            KeystrokeOutcome::Applied
        }
        ChordAction::Literal(text) => {
            field.replace_selection(text);
            KeystrokeOutcome::Applied
        }
        ChordAction::Command(EditorCommand::Undo) => changed(field.undo()),
        ChordAction::Command(EditorCommand::Redo) => changed(field.redo()),
        ChordAction::Command(cmd) => KeystrokeOutcome::Command(*cmd),
    }
}

/// An error from the last result, in buffer coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocatedError {
    pub code: u32,
    pub is_critical: bool,
    /// Translated and clamped to the buffer length
    pub position: usize,
}

/// Editor for one formal expression
#[derive(Debug)]
pub struct ExpressionEditor {
    alias: String,
    kind: ConstituentKind,
    field: EditableState,
    modified: bool,
    last_result: Option<VerificationResult>,
    focused: bool,
    session: VerificationSession,
}

impl ExpressionEditor {
    /// Open an editor on a constituent's current expression
    pub fn new(context: ExpressionContext) -> Self {
        Self {
            field: EditableState::from_text(&context.raw_expression),
            alias: context.alias,
            kind: context.kind,
            modified: false,
            last_result: None,
            focused: false,
            session: VerificationSession::new(),
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.field = self.field.with_history_limit(limit);
        self
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn kind(&self) -> ConstituentKind {
        self.kind
    }

    pub fn text(&self) -> String {
        self.field.text()
    }

    pub fn field(&self) -> &EditableState {
        &self.field
    }

    pub fn selection(&self) -> Selection {
        self.field.selection()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn last_result(&self) -> Option<&VerificationResult> {
        self.last_result.as_ref()
    }

    pub fn is_verifying(&self) -> bool {
        self.session.is_pending()
    }

    pub fn context(&self) -> ExpressionContext {
        ExpressionContext::new(self.alias.clone(), self.kind, self.field.text())
    }

    /// Recomputed on every call
    pub fn status(&self) -> ValidityStatus {
        status::resolve(self.modified, self.last_result.as_ref())
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Expression fields always consult the symbolic table
    pub fn mode(&self) -> NotationMode {
        NotationMode::Symbolic
    }

    // =========================================================================
    // Editing
    // =========================================================================

    pub fn on_token(&mut self, token: TokenId) {
        rule_for(token).apply(&mut self.field);
        self.modified = true;
        self.focus();
    }

    pub fn on_keystroke(&mut self, keystroke: &Keystroke, chords: &ChordTable) -> KeystrokeOutcome {
        let Some(action) = chords.chord_for(keystroke, self.mode()) else {
            return KeystrokeOutcome::PassThrough;
        };
        tracing::trace!(target: "editor", %keystroke, %action, "chord matched");
        let outcome = apply_chord(&mut self.field, action);
        if outcome == KeystrokeOutcome::Applied {
            self.modified = true;
        }
        outcome
    }

    /// Accept a value change made by the host (typing, paste)
    pub fn on_direct_edit(&mut self, new_value: &str, selection: Option<Selection>) {
        self.field.apply_external_edit(new_value, selection);
        self.modified = true;
    }

    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.field.set_selection(start, end);
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.field.undo();
        self.modified |= changed;
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.field.redo();
        self.modified |= changed;
        changed
    }

    // =========================================================================
    // Verification
    // =========================================================================

    pub fn request_verification(&mut self) -> VerificationRequest {
        self.session.submit(&self.context())
    }

    /// Returns true if the report was applied
    pub fn on_verification_response(&mut self, id: RequestId, report: CheckerReport) -> bool {
        match self.session.on_response(id, report, &self.field.text()) {
            ResponseOutcome::Applied(result) => {
                tracing::debug!(
                    target: "verification",
                    %id,
                    errors = result.errors.len(),
                    "result applied"
                );
                self.last_result = Some(result);
                self.modified = false;
                true
            }
            ResponseOutcome::Stale | ResponseOutcome::Unknown => false,
        }
    }

    /// Prior state is left untouched
    pub fn on_verification_failure(
        &mut self,
        id: RequestId,
        error: &CheckerError,
    ) -> Option<Notice> {
        self.session.on_failure(id, error)
    }

    /// Errors from the last accepted result, in buffer coordinates
    pub fn errors(&self) -> Vec<LocatedError> {
        let Some(result) = &self.last_result else {
            return Vec::new();
        };
        let len = self.field.len_chars();
        result
            .errors
            .iter()
            .map(|e| LocatedError {
                code: e.code,
                is_critical: e.is_critical,
                position: translate_position(e.absolute_position, result.prefix_len).min(len),
            })
            .collect()
    }

    /// Put the caret on an error. Returns false for an out-of-range index.
    pub fn select_error(&mut self, index: usize) -> bool {
        let Some(error) = self.errors().get(index).copied() else {
            return false;
        };
        self.field.set_caret(error.position);
        self.focus();
        true
    }

    /// Move to the first error after the caret, wrapping to the first error
    pub fn next_error(&mut self) -> Option<LocatedError> {
        let errors = self.errors();
        let caret = self.field.selection().start;
        let next = errors
            .iter()
            .find(|e| e.position > caret)
            .or_else(|| errors.first())
            .copied()?;
        self.field.set_caret(next.position);
        self.focus();
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{KeyCode, Modifiers};
    use crate::verification::{ReportedError, ValueClass};

    fn editor(text: &str) -> ExpressionEditor {
        ExpressionEditor::new(ExpressionContext::new("D1", ConstituentKind::Term, text))
    }

    fn report(errors: &[(usize, bool)]) -> CheckerReport {
        CheckerReport {
            errors: errors
                .iter()
                .map(|&(absolute_position, is_critical)| ReportedError {
                    code: 0x8840,
                    is_critical,
                    absolute_position,
                    params: vec![],
                })
                .collect(),
            value_class: ValueClass::Value,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_editor_is_unknown_and_clean() {
        let ed = editor("X1");
        assert!(!ed.is_modified());
        assert_eq!(ed.status(), ValidityStatus::Unknown);
        assert_eq!(ed.selection(), Selection::caret(2));
    }

    #[test]
    fn test_token_marks_modified_and_focuses() {
        let mut ed = editor("");
        ed.on_token(TokenId::Forall);
        assert_eq!(ed.text(), "∀");
        assert!(ed.is_modified());
        assert!(ed.is_focused());
    }

    #[test]
    fn test_keystroke_interception() {
        let chords = ChordTable::with_defaults();
        let mut ed = editor("");

        let alt_x = Keystroke::new(KeyCode::Char('x'), Modifiers::ALT);
        assert_eq!(ed.on_keystroke(&alt_x, &chords), KeystrokeOutcome::Applied);
        assert_eq!(ed.text(), "ξ");

        let plain = Keystroke::char('q');
        assert_eq!(ed.on_keystroke(&plain, &chords), KeystrokeOutcome::PassThrough);
        assert_eq!(ed.text(), "ξ");
    }

    #[test]
    fn test_verify_chord_is_returned_as_command() {
        let chords = ChordTable::with_defaults();
        let mut ed = editor("X1");
        let verify = Keystroke::new(KeyCode::Enter, Modifiers::cmd());
        assert_eq!(
            ed.on_keystroke(&verify, &chords),
            KeystrokeOutcome::Command(EditorCommand::Verify)
        );
        assert!(!ed.is_modified());
    }

    #[test]
    fn test_response_clears_modified() {
        let mut ed = editor("");
        ed.on_direct_edit("X1", None);
        let request = ed.request_verification();
        assert!(ed.is_verifying());
        assert!(ed.on_verification_response(request.id, report(&[])));
        assert!(!ed.is_modified());
        assert_eq!(ed.status(), ValidityStatus::VerifiedOk);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut ed = editor("A");
        let request = ed.request_verification();
        ed.on_direct_edit("AB", None);
        assert!(!ed.on_verification_response(request.id, report(&[])));
        assert!(ed.is_modified());
        assert_eq!(ed.status(), ValidityStatus::Unknown);
        assert!(ed.last_result().is_none());
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut ed = editor("X1");
        let first = ed.request_verification();
        ed.on_verification_response(first.id, report(&[]));

        let second = ed.request_verification();
        let notice = ed.on_verification_failure(second.id, &CheckerError::Unavailable);
        assert!(notice.is_some());
        assert_eq!(ed.status(), ValidityStatus::VerifiedOk);
        assert_eq!(ed.text(), "X1");
    }

    #[test]
    fn test_error_inside_prefix_maps_to_zero() {
        let mut ed = editor("X1");
        let request = ed.request_verification();
        ed.on_verification_response(request.id, report(&[(2, true)]));
        assert_eq!(ed.errors()[0].position, 0);
        assert!(ed.select_error(0));
        assert_eq!(ed.selection(), Selection::caret(0));
    }

    #[test]
    fn test_error_past_end_is_clamped() {
        let mut ed = editor("X1");
        let request = ed.request_verification();
        ed.on_verification_response(request.id, report(&[(40, false)]));
        assert_eq!(ed.errors()[0].position, 2);
    }

    #[test]
    fn test_next_error_wraps() {
        let mut ed = editor("X1∪X2∪X3");
        let request = ed.request_verification();
        ed.on_verification_response(request.id, report(&[(6, false), (9, true)]));
        ed.set_selection(0, 0);

        assert_eq!(ed.next_error().map(|e| e.position), Some(1));
        assert_eq!(ed.next_error().map(|e| e.position), Some(4));
        assert_eq!(ed.next_error().map(|e| e.position), Some(1));
    }

    #[test]
    fn test_select_error_out_of_range() {
        let mut ed = editor("X1");
        assert!(!ed.select_error(0));
    }

    #[test]
    fn test_undo_marks_modified() {
        let mut ed = editor("");
        ed.on_token(TokenId::EmptySet);
        let request = ed.request_verification();
        ed.on_verification_response(request.id, report(&[]));
        assert!(!ed.is_modified());

        assert!(ed.undo());
        assert_eq!(ed.text(), "");
        assert!(ed.is_modified());
        assert!(ed.redo());
        assert_eq!(ed.text(), "∅");
    }
}
