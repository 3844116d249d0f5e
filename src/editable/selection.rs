//! Selection span for a single editable field.

use std::ops::Range;

/// A selected character span `[start, end)`. A caret is an empty span.
///
/// Always normalized so that `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection, normalizing reversed bounds
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed selection (caret with no highlighted text)
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Check if selection is empty (caret only)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both bounds into `[0, max]`
    pub fn clamped(self, max: usize) -> Self {
        Self::new(self.start.min(max), self.end.min(max))
    }

    /// Shift both bounds right by `delta`
    pub fn shifted(self, delta: usize) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }

    /// Check if a position is within this selection (end-exclusive)
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
