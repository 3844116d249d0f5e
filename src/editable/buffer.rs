//! Storage behind an editable field.
//!
//! Expression fields are short and use [`StringBuffer`]; prose fields can run to
//! several paragraphs and use [`RopeBuffer`]. Offsets are always character
//! offsets: selections and checker error positions share that coordinate space.

use std::ops::Range;

use ropey::Rope;

/// Clamp `range` to `[0, len]`, returning `None` when nothing is left
fn clamp(range: Range<usize>, len: usize) -> Option<Range<usize>> {
    let start = range.start.min(len);
    let end = range.end.min(len);
    (start < end).then_some(start..end)
}

/// Read access to field text
pub trait TextBuffer {
    fn len_chars(&self) -> usize;

    /// Text in a character range, clamped to the buffer
    fn slice(&self, range: Range<usize>) -> String;

    fn content(&self) -> String;

    /// True if `text` ends exactly at `offset`
    fn is_preceded_by(&self, offset: usize, text: &str) -> bool {
        let len = text.chars().count();
        len <= offset && offset <= self.len_chars() && self.slice(offset - len..offset) == text
    }

    /// True if `text` starts exactly at `offset`
    fn is_followed_by(&self, offset: usize, text: &str) -> bool {
        let len = text.chars().count();
        offset + len <= self.len_chars() && self.slice(offset..offset + len) == text
    }
}

/// Write access to field text. Out-of-range offsets are clamped, never rejected.
pub trait TextBufferMut: TextBuffer {
    fn insert(&mut self, offset: usize, text: &str);

    fn remove(&mut self, range: Range<usize>);

    fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }

    fn set_content(&mut self, text: &str) {
        self.remove(0..self.len_chars());
        self.insert(0, text);
    }
}

// =============================================================================
// StringBuffer
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// Byte index of a character offset, or the end of the text
    fn byte_index(&self, offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

impl TextBuffer for StringBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn slice(&self, range: Range<usize>) -> String {
        match clamp(range, self.len_chars()) {
            Some(r) => self.text.chars().skip(r.start).take(r.len()).collect(),
            None => String::new(),
        }
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let at = self.byte_index(offset);
        self.text.insert_str(at, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        if let Some(r) = clamp(range, self.len_chars()) {
            let bytes = self.byte_index(r.start)..self.byte_index(r.end);
            self.text.replace_range(bytes, "");
        }
    }

    fn set_content(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

// =============================================================================
// RopeBuffer
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }
}

impl TextBuffer for RopeBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn slice(&self, range: Range<usize>) -> String {
        clamp(range, self.rope.len_chars())
            .map(|r| self.rope.slice(r).to_string())
            .unwrap_or_default()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let at = offset.min(self.rope.len_chars());
        self.rope.insert(at, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        if let Some(r) = clamp(range, self.rope.len_chars()) {
            self.rope.remove(r);
        }
    }

    fn set_content(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }
}
