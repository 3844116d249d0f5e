//! Symbolic insertion grammar
//!
//! Two static tables drive symbolic input:
//! - [`rule_for`] maps every [`TokenId`] to exactly one [`InsertionRule`]
//! - [`ChordTable::chord_for`] maps a [`Keystroke`] in a [`NotationMode`] to a token,
//!   a literal replacement or an editor command
//!
//! # Architecture
//!
//! ```text
//! host key event → Keystroke → ChordTable::chord_for() → ChordAction
//!                                                          ├─ Token → rule_for().apply()
//!                                                          ├─ Literal → replace_selection()
//!                                                          └─ Command → editor
//! ```
//!
//! A keystroke with no chord is ordinary text input and is left to the host widget.

mod chords;
mod config;
mod rule;
mod token;
mod types;

pub use chords::{
    default_chords, ChordAction, ChordBinding, ChordTable, EditorCommand, NotationMode,
    LOCAL_IDENTIFIERS,
};
pub use config::{
    load_chord_file, load_chord_table, merge_chords, parse_chord_yaml, parse_key_string,
    parse_mode, ChordConfigError, ChordOverride,
};
pub use rule::{rule_for, InsertionRule, Marker};
pub use token::TokenId;
pub use types::{KeyCode, Keystroke, Modifiers};
