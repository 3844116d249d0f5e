//! Chord table: physical key combinations resolved to tokens, literals or commands

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::token::TokenId;
use super::types::{KeyCode, Keystroke, Modifiers};

/// Which chord table a focused field consults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationMode {
    /// Plain prose fields (terms, conventions, comments)
    #[default]
    Text,
    /// Formal expression fields
    Symbolic,
}

impl fmt::Display for NotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationMode::Text => f.write_str("text"),
            NotationMode::Symbolic => f.write_str("symbolic"),
        }
    }
}

/// Editor-level actions that can be bound to chords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    Verify,
    ResolveReferences,
    Undo,
    Redo,
}

impl EditorCommand {
    pub fn name(self) -> &'static str {
        match self {
            EditorCommand::Verify => "Verify",
            EditorCommand::ResolveReferences => "ResolveReferences",
            EditorCommand::Undo => "Undo",
            EditorCommand::Redo => "Redo",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        [
            EditorCommand::Verify,
            EditorCommand::ResolveReferences,
            EditorCommand::Undo,
            EditorCommand::Redo,
        ]
        .into_iter()
        .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
    }
}

/// Result of resolving a keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordAction {
    /// Apply this token's insertion rule
    Token(TokenId),
    /// Replace the selection with this literal text
    Literal(String),
    /// Run an editor command
    Command(EditorCommand),
}

impl fmt::Display for ChordAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordAction::Token(token) => write!(f, "{} ({})", token.name(), token.label()),
            ChordAction::Literal(text) => write!(f, "insert \"{}\"", text),
            ChordAction::Command(cmd) => write!(f, "{}", cmd.name()),
        }
    }
}

/// A single chord binding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordBinding {
    pub keystroke: Keystroke,
    pub mode: NotationMode,
    pub action: ChordAction,
}

impl ChordBinding {
    pub fn new(keystroke: Keystroke, mode: NotationMode, action: ChordAction) -> Self {
        Self {
            keystroke,
            mode,
            action,
        }
    }

    pub fn symbolic(keystroke: Keystroke, action: ChordAction) -> Self {
        Self::new(keystroke, NotationMode::Symbolic, action)
    }
}

/// Chord lookup for both notation modes
#[derive(Debug, Clone, Default)]
pub struct ChordTable {
    bindings: Vec<ChordBinding>,
    /// Fast lookup (indices into bindings)
    lookup: HashMap<(NotationMode, Keystroke), usize>,
}

impl ChordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from bindings; a later binding for the same key and mode wins
    pub fn with_bindings(bindings: Vec<ChordBinding>) -> Self {
        let mut table = Self::new();
        for binding in bindings {
            table.add_binding(binding);
        }
        table
    }

    /// The shipped defaults
    pub fn with_defaults() -> Self {
        Self::with_bindings(default_chords())
    }

    pub fn add_binding(&mut self, binding: ChordBinding) {
        let key = (binding.mode, binding.keystroke);
        match self.lookup.get(&key) {
            Some(&idx) => self.bindings[idx] = binding,
            None => {
                self.lookup.insert(key, self.bindings.len());
                self.bindings.push(binding);
            }
        }
    }

    /// Resolve a keystroke in the given mode. `None` means ordinary text input.
    pub fn chord_for(&self, keystroke: &Keystroke, mode: NotationMode) -> Option<&ChordAction> {
        let idx = self
            .lookup
            .get(&(mode, *keystroke))
            .or_else(|| {
                let relaxed = keystroke.without_symbol_shift()?;
                self.lookup.get(&(mode, relaxed))
            })?;
        Some(&self.bindings[*idx].action)
    }

    pub fn bindings(&self) -> &[ChordBinding] {
        &self.bindings
    }

    /// Bindings of one mode, in insertion order
    pub fn bindings_for_mode(&self, mode: NotationMode) -> impl Iterator<Item = &ChordBinding> {
        self.bindings.iter().filter(move |b| b.mode == mode)
    }

    /// Get the first symbolic binding for a token
    pub fn binding_for_token(&self, token: TokenId) -> Option<&ChordBinding> {
        self.bindings
            .iter()
            .find(|b| b.mode == NotationMode::Symbolic && b.action == ChordAction::Token(token))
    }

    /// Get display string for a token's chord (for toolbar tooltips)
    pub fn display_for(&self, token: TokenId) -> Option<String> {
        self.binding_for_token(token)
            .map(|b| b.keystroke.display_string())
    }
}

// =============================================================================
// Defaults
// =============================================================================

/// Alt+letter glyphs for local identifiers
pub const LOCAL_IDENTIFIERS: &[(char, &str)] = &[
    ('a', "α"),
    ('b', "β"),
    ('g', "γ"),
    ('d', "δ"),
    ('e', "ε"),
    ('z', "ζ"),
    ('h', "η"),
    ('q', "θ"),
    ('i', "ι"),
    ('k', "κ"),
    ('l', "λ"),
    ('m', "μ"),
    ('n', "ν"),
    ('x', "ξ"),
    ('p', "π"),
    ('r', "ρ"),
    ('s', "σ"),
    ('t', "τ"),
    ('u', "υ"),
    ('f', "φ"),
    ('c', "χ"),
    ('y', "ψ"),
    ('w', "ω"),
];

/// Alt+Shift+letter chords for tokens
const TOKEN_LETTER_CHORDS: &[(char, TokenId)] = &[
    ('a', TokenId::Forall),
    ('e', TokenId::Exists),
    ('n', TokenId::Negation),
    ('v', TokenId::Or),
    ('l', TokenId::Implication),
    ('q', TokenId::Equivalence),
    ('i', TokenId::In),
    ('o', TokenId::NotIn),
    ('s', TokenId::SubsetOrEq),
    ('u', TokenId::Union),
    ('c', TokenId::Intersection),
    ('m', TokenId::SetMinus),
    ('y', TokenId::SymmetricMinus),
    ('x', TokenId::Decart),
    ('b', TokenId::Boolean),
    ('p', TokenId::BigProjection),
    ('f', TokenId::Filter),
    ('t', TokenId::Card),
    ('z', TokenId::IntegerSet),
    ('d', TokenId::Declarative),
    ('r', TokenId::Recursive),
    ('k', TokenId::Imperative),
];

/// Alt+symbol chords for tokens
const TOKEN_SYMBOL_CHORDS: &[(char, TokenId)] = &[
    ('9', TokenId::Parentheses),
    ('[', TokenId::Brackets),
    (']', TokenId::Braces),
    ('0', TokenId::EmptySet),
    ('=', TokenId::NotEqual),
    (';', TokenId::Iterate),
    ('.', TokenId::Assign),
];

/// Plain ASCII keys replaced by their symbolic counterpart
const LITERAL_SUBSTITUTIONS: &[(char, &str)] = &[('*', "×"), ('~', "¬")];

/// Hardcoded default chord table
pub fn default_chords() -> Vec<ChordBinding> {
    let mut bindings = Vec::new();
    let cmd = Modifiers::cmd();

    for &(key, token) in TOKEN_LETTER_CHORDS {
        bindings.push(ChordBinding::symbolic(
            Keystroke::char_with_mods(key, Modifiers::ALT | Modifiers::SHIFT),
            ChordAction::Token(token),
        ));
    }
    for &(key, token) in TOKEN_SYMBOL_CHORDS {
        bindings.push(ChordBinding::symbolic(
            Keystroke::char_with_mods(key, Modifiers::ALT),
            ChordAction::Token(token),
        ));
    }
    for &(key, glyph) in LOCAL_IDENTIFIERS {
        bindings.push(ChordBinding::symbolic(
            Keystroke::char_with_mods(key, Modifiers::ALT),
            ChordAction::Literal(glyph.to_string()),
        ));
    }
    for &(key, literal) in LITERAL_SUBSTITUTIONS {
        bindings.push(ChordBinding::symbolic(
            Keystroke::char(key),
            ChordAction::Literal(literal.to_string()),
        ));
    }

    bindings.push(ChordBinding::symbolic(
        Keystroke::new(KeyCode::Enter, cmd),
        ChordAction::Command(EditorCommand::Verify),
    ));
    bindings.push(ChordBinding::new(
        Keystroke::new(KeyCode::Enter, cmd),
        NotationMode::Text,
        ChordAction::Command(EditorCommand::ResolveReferences),
    ));
    for mode in [NotationMode::Symbolic, NotationMode::Text] {
        bindings.push(ChordBinding::new(
            Keystroke::char_with_mods('z', cmd),
            mode,
            ChordAction::Command(EditorCommand::Undo),
        ));
        bindings.push(ChordBinding::new(
            Keystroke::char_with_mods('z', cmd | Modifiers::SHIFT),
            mode,
            ChordAction::Command(EditorCommand::Redo),
        ));
    }

    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt_shift(c: char) -> Keystroke {
        Keystroke::char_with_mods(c, Modifiers::ALT | Modifiers::SHIFT)
    }

    #[test]
    fn test_token_chord_in_symbolic_mode() {
        let table = ChordTable::with_defaults();
        assert_eq!(
            table.chord_for(&alt_shift('a'), NotationMode::Symbolic),
            Some(&ChordAction::Token(TokenId::Forall))
        );
    }

    #[test]
    fn test_text_mode_ignores_symbolic_chords() {
        let table = ChordTable::with_defaults();
        assert_eq!(table.chord_for(&alt_shift('a'), NotationMode::Text), None);
        assert_eq!(table.chord_for(&Keystroke::char('*'), NotationMode::Text), None);
    }

    #[test]
    fn test_local_identifier_glyph() {
        let table = ChordTable::with_defaults();
        let stroke = Keystroke::char_with_mods('x', Modifiers::ALT);
        assert_eq!(
            table.chord_for(&stroke, NotationMode::Symbolic),
            Some(&ChordAction::Literal("ξ".to_string()))
        );
    }

    #[test]
    fn test_literal_substitution_with_shift_held() {
        let table = ChordTable::with_defaults();
        let stroke = Keystroke::char_with_mods('*', Modifiers::SHIFT);
        assert_eq!(
            table.chord_for(&stroke, NotationMode::Symbolic),
            Some(&ChordAction::Literal("×".to_string()))
        );
    }

    #[test]
    fn test_plain_letter_falls_through() {
        let table = ChordTable::with_defaults();
        assert_eq!(
            table.chord_for(&Keystroke::char('x'), NotationMode::Symbolic),
            None
        );
    }

    #[test]
    fn test_later_binding_wins() {
        let stroke = Keystroke::char('*');
        let table = ChordTable::with_bindings(vec![
            ChordBinding::symbolic(stroke, ChordAction::Literal("×".to_string())),
            ChordBinding::symbolic(stroke, ChordAction::Token(TokenId::Intersection)),
        ]);
        assert_eq!(table.bindings().len(), 1);
        assert_eq!(
            table.chord_for(&stroke, NotationMode::Symbolic),
            Some(&ChordAction::Token(TokenId::Intersection))
        );
    }

    #[test]
    fn test_default_keys_are_unique_per_mode() {
        let defaults = default_chords();
        let table = ChordTable::with_bindings(defaults.clone());
        assert_eq!(table.bindings().len(), defaults.len());
    }

    #[test]
    fn test_display_for_token() {
        let table = ChordTable::with_defaults();
        let display = table.display_for(TokenId::Boolean).unwrap();
        assert!(display.contains('B'));
        assert_eq!(table.display_for(TokenId::And), None);
    }

    #[test]
    fn test_command_names() {
        assert_eq!(
            EditorCommand::from_name("verify"),
            Some(EditorCommand::Verify)
        );
        assert_eq!(EditorCommand::from_name("Save"), None);
    }
}
