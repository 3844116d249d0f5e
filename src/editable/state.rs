//! EditableState - one editable field: buffer, selection span and undo history.

use super::buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
use super::history::{EditHistory, EditStep};
use super::selection::Selection;

/// Editable text with a single selection span and undo/redo history.
///
/// Invariant: `0 <= selection.start <= selection.end <= buffer.len_chars()`.
/// Every mutating method keeps it; none of them can fail.
#[derive(Debug, Clone)]
pub struct EditableState<B: TextBufferMut = StringBuffer> {
    /// The text buffer
    pub buffer: B,
    selection: Selection,
    history: EditHistory,
}

impl EditableState<StringBuffer> {
    /// Create a field holding `text` with the caret at the end
    pub fn from_text(text: &str) -> Self {
        let mut state = Self::new(StringBuffer::from_text(text));
        state.selection = Selection::caret(state.buffer.len_chars());
        state
    }
}

impl EditableState<RopeBuffer> {
    /// Create a rope-backed field holding `text` with the caret at the end
    pub fn rope_from_text(text: &str) -> Self {
        let mut state = Self::new(RopeBuffer::from_text(text));
        state.selection = Selection::caret(state.buffer.len_chars());
        state
    }
}

impl<B: TextBufferMut> EditableState<B> {
    /// Create a new EditableState with the caret at the start
    pub fn new(buffer: B) -> Self {
        Self {
            buffer,
            selection: Selection::caret(0),
            history: EditHistory::default(),
        }
    }

    /// Replace the history with one bounded to `limit` steps
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = EditHistory::with_limit(limit);
        self
    }

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Get the selected text (empty string for a caret)
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.buffer.slice(self.selection.range())
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Set the selection, clamping both bounds into `[0, len]`
    pub fn set_selection(&mut self, start: usize, end: usize) {
        self.selection = Selection::new(start, end).clamped(self.buffer.len_chars());
    }

    /// Place a caret, clamped into the buffer
    pub fn set_caret(&mut self, pos: usize) {
        self.set_selection(pos, pos);
    }

    /// Select the whole buffer
    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.buffer.len_chars());
    }

    /// Load new content without recording history (field opened or reset).
    /// The caret moves to the end.
    pub fn set_content(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.selection = Selection::caret(self.buffer.len_chars());
        self.history.clear();
    }
}

// =============================================================================
// Insertion operations
// =============================================================================

impl<B: TextBufferMut> EditableState<B> {
    /// Replace `[start, end)` with `text`; caret lands after the inserted text.
    pub fn replace_selection(&mut self, text: &str) {
        let before = self.selection;
        let deleted = self.selected_text();
        self.buffer.replace(before.range(), text);

        let caret = before.start + text.chars().count();
        self.selection = Selection::caret(caret);
        self.history.record(EditStep::new(
            before.start,
            deleted,
            text.to_string(),
            before,
            self.selection,
        ));
    }

    /// Insert `left` before and `right` after the selection.
    ///
    /// The originally selected span stays selected, offset by the length of `left`.
    /// For a caret this leaves the caret between `left` and `right`.
    pub fn wrap_selection(&mut self, left: &str, right: &str) {
        let before = self.selection;
        let inner = self.selected_text();

        self.buffer.insert(before.end, right);
        self.buffer.insert(before.start, left);

        self.selection = before.shifted(left.chars().count());
        self.history.record(EditStep::new(
            before.start,
            inner.clone(),
            format!("{left}{inner}{right}"),
            before,
            self.selection,
        ));
    }

    /// Check whether `left` immediately precedes and `right` immediately follows the selection
    pub fn is_wrapped_by(&self, left: &str, right: &str) -> bool {
        let sel = self.selection;
        self.buffer.is_preceded_by(sel.start, left) && self.buffer.is_followed_by(sel.end, right)
    }

    /// Remove `left`/`right` around the selection, keeping the inner span selected.
    ///
    /// Returns false (and changes nothing) when the selection is not wrapped by them.
    pub fn unwrap_selection(&mut self, left: &str, right: &str) -> bool {
        if !self.is_wrapped_by(left, right) {
            return false;
        }

        let before = self.selection;
        let inner = self.selected_text();
        let left_len = left.chars().count();
        let right_len = right.chars().count();

        self.buffer.remove(before.end..before.end + right_len);
        self.buffer.remove(before.start - left_len..before.start);

        self.selection = Selection::new(before.start - left_len, before.end - left_len);
        self.history.record(EditStep::new(
            before.start - left_len,
            format!("{left}{inner}{right}"),
            inner,
            before,
            self.selection,
        ));
        true
    }

    /// Accept a value change made outside the insertion operations (typing, paste).
    ///
    /// The change is recorded as the minimal replaced span so undo restores it.
    /// `selection` is where the host left the caret; `None` puts it after the change.
    pub fn apply_external_edit(&mut self, new_text: &str, selection: Option<Selection>) {
        let old: Vec<char> = self.buffer.content().chars().collect();
        let new: Vec<char> = new_text.chars().collect();

        let prefix = old
            .iter()
            .zip(new.iter())
            .take_while(|(a, b)| a == b)
            .count();
        let max_suffix = old.len().min(new.len()) - prefix;
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take(max_suffix)
            .take_while(|(a, b)| a == b)
            .count();

        let deleted: String = old[prefix..old.len() - suffix].iter().collect();
        let inserted: String = new[prefix..new.len() - suffix].iter().collect();
        let inserted_len = new.len() - suffix - prefix;

        let before = self.selection;
        self.buffer
            .replace(prefix..old.len() - suffix, inserted.as_str());
        self.selection = match selection {
            Some(sel) => sel.clamped(self.buffer.len_chars()),
            None => Selection::caret(prefix + inserted_len),
        };
        self.history.record(EditStep::new(
            prefix,
            deleted,
            inserted,
            before,
            self.selection,
        ));
    }
}

// =============================================================================
// Undo / Redo
// =============================================================================

impl<B: TextBufferMut> EditableState<B> {
    /// Undo the last edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(step) = self.history.take_undo() else {
            return false;
        };
        self.buffer.replace(step.inserted_range(), &step.removed);
        self.selection = step.before.clamped(self.buffer.len_chars());
        true
    }

    /// Redo the last undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(step) = self.history.take_redo() else {
            return false;
        };
        self.buffer.replace(step.removed_range(), &step.inserted);
        self.selection = step.after.clamped(self.buffer.len_chars());
        true
    }
}
