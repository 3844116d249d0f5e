//! Bounded undo/redo for one field.

use std::collections::VecDeque;

use super::selection::Selection;

/// Undo steps kept when no limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 200;

/// One recorded change: `removed` at `offset` was replaced by `inserted`.
///
/// Token insertions, toggles and host edits all reduce to this shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStep {
    pub offset: usize,
    pub removed: String,
    pub inserted: String,
    /// Selection to restore on undo
    pub before: Selection,
    /// Selection to restore on redo
    pub after: Selection,
}

impl EditStep {
    pub fn new(
        offset: usize,
        removed: impl Into<String>,
        inserted: impl Into<String>,
        before: Selection,
        after: Selection,
    ) -> Self {
        Self {
            offset,
            removed: removed.into(),
            inserted: inserted.into(),
            before,
            after,
        }
    }

    /// Range occupied by `inserted` once the step is applied
    pub fn inserted_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.inserted.chars().count()
    }

    /// Range occupied by `removed` once the step is undone
    pub fn removed_range(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.removed.chars().count()
    }

    fn changes_text(&self) -> bool {
        self.removed != self.inserted
    }
}

/// Undo and redo stacks. The oldest step is dropped once `limit` is exceeded.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo: VecDeque<EditStep>,
    redo: Vec<EditStep>,
    limit: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl EditHistory {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record a step. Steps that leave the text unchanged are ignored.
    pub fn record(&mut self, step: EditStep) {
        if !step.changes_text() {
            return;
        }
        self.redo.clear();
        self.undo.push_back(step);
        if self.undo.len() > self.limit {
            self.undo.pop_front();
        }
    }

    /// Take the newest step for undoing; it becomes redoable
    pub fn take_undo(&mut self) -> Option<EditStep> {
        let step = self.undo.pop_back()?;
        self.redo.push(step.clone());
        Some(step)
    }

    /// Take the newest undone step for redoing; it becomes undoable again
    pub fn take_redo(&mut self) -> Option<EditStep> {
        let step = self.redo.pop()?;
        self.undo.push_back(step.clone());
        Some(step)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
