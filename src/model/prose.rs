//! Text-mode field with reference resolution

use crate::editable::{EditableState, RopeBuffer, Selection};
use crate::grammar::{ChordTable, Keystroke, NotationMode};
use crate::verification::{
    CheckerError, ReferenceRequest, ReferenceResolution, ReferenceSession, RequestId,
    ResponseOutcome,
};

use super::editor::{apply_chord, KeystrokeOutcome};
use super::notice::Notice;

/// A plain prose field (term text, definition comments), rope-backed
#[derive(Debug)]
pub struct ProseField {
    field: EditableState<RopeBuffer>,
    focused: bool,
    resolution: Option<ReferenceResolution>,
    session: ReferenceSession,
}

impl ProseField {
    pub fn new(text: &str) -> Self {
        Self {
            field: EditableState::rope_from_text(text),
            focused: false,
            resolution: None,
            session: ReferenceSession::new(),
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.field = self.field.with_history_limit(limit);
        self
    }

    pub fn text(&self) -> String {
        self.field.text()
    }

    pub fn field(&self) -> &EditableState<RopeBuffer> {
        &self.field
    }

    pub fn selection(&self) -> Selection {
        self.field.selection()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn mode(&self) -> NotationMode {
        NotationMode::Text
    }

    pub fn on_keystroke(&mut self, keystroke: &Keystroke, chords: &ChordTable) -> KeystrokeOutcome {
        match chords.chord_for(keystroke, self.mode()) {
            Some(action) => apply_chord(&mut self.field, action),
            None => KeystrokeOutcome::PassThrough,
        }
    }

    pub fn on_direct_edit(&mut self, new_value: &str, selection: Option<Selection>) {
        self.field.apply_external_edit(new_value, selection);
    }

    pub fn undo(&mut self) -> bool {
        self.field.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.field.redo()
    }

    pub fn is_resolving(&self) -> bool {
        self.session.is_pending()
    }

    /// Last resolution, only if it still describes the current text
    pub fn resolution(&self) -> Option<&ReferenceResolution> {
        self.resolution
            .as_ref()
            .filter(|r| r.requested_text == self.field.text())
    }

    pub fn request_resolution(&mut self) -> ReferenceRequest {
        self.session.submit(&self.field.text())
    }

    pub fn on_resolution_response(&mut self, id: RequestId, payload: serde_json::Value) -> bool {
        match self.session.on_response(id, payload, &self.field.text()) {
            ResponseOutcome::Applied(resolution) => {
                self.resolution = Some(resolution);
                true
            }
            ResponseOutcome::Stale | ResponseOutcome::Unknown => false,
        }
    }

    pub fn on_resolution_failure(&mut self, id: RequestId, error: &CheckerError) -> Option<Notice> {
        self.session.on_failure(id, error)
    }
}
