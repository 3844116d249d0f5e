//! Editable text fields.
//!
//! An expression field is a plain buffer plus one selection span. Symbolic insertion,
//! direct typing and undo all go through [`EditableState`], so the owning editor only
//! has to observe that a mutating call happened.
//!
//! # Example
//!
//! ```
//! use formula_editor::editable::EditableState;
//!
//! let mut field = EditableState::from_text("X1");
//! field.select_all();
//! field.wrap_selection("ℬ(", ")");
//!
//! assert_eq!(field.text(), "ℬ(X1)");
//! assert_eq!(field.selected_text(), "X1");
//! ```

mod buffer;
mod history;
mod selection;
mod state;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use history::{EditHistory, EditStep, DEFAULT_HISTORY_LIMIT};
pub use selection::Selection;
pub use state::EditableState;
