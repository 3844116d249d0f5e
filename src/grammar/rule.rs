//! Insertion rules: how a token changes the field it is applied to

use crate::editable::{EditableState, TextBufferMut};

use super::token::TokenId;

/// Boundary text that marks an existing wrapping for toggle rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub open: &'static str,
    pub close: &'static str,
}

/// What inserting a token does to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertionRule {
    /// Substitute the selection with literal text
    Replace(&'static str),
    /// Wrap the selection (or caret) with fixed left/right text
    Envelope {
        left: &'static str,
        right: &'static str,
    },
    /// Wrap like `Envelope`, unless the selection is already bounded by `marker`
    /// on both sides, in which case the marker is stripped instead
    ToggleEnvelope {
        marker: Marker,
        left: &'static str,
        right: &'static str,
    },
}

impl InsertionRule {
    const fn replace(literal: &'static str) -> Self {
        InsertionRule::Replace(literal)
    }

    const fn envelope(left: &'static str, right: &'static str) -> Self {
        InsertionRule::Envelope { left, right }
    }

    const fn toggle(open: &'static str, close: &'static str) -> Self {
        InsertionRule::ToggleEnvelope {
            marker: Marker { open, close },
            left: open,
            right: close,
        }
    }

    /// Apply this rule to a field
    pub fn apply<B: TextBufferMut>(&self, field: &mut EditableState<B>) {
        match *self {
            InsertionRule::Replace(literal) => field.replace_selection(literal),
            InsertionRule::Envelope { left, right } => field.wrap_selection(left, right),
            InsertionRule::ToggleEnvelope {
                marker,
                left,
                right,
            } => {
                if !field.unwrap_selection(marker.open, marker.close) {
                    field.wrap_selection(left, right);
                }
            }
        }
    }
}

/// Look up the insertion rule for a token
pub fn rule_for(token: TokenId) -> InsertionRule {
    match token {
        TokenId::Negation => InsertionRule::replace("¬"),
        TokenId::And => InsertionRule::replace("&"),
        TokenId::Or => InsertionRule::replace("∨"),
        TokenId::Implication => InsertionRule::replace("⇒"),
        TokenId::Equivalence => InsertionRule::replace("⇔"),
        TokenId::Forall => InsertionRule::envelope("∀", ""),
        TokenId::Exists => InsertionRule::envelope("∃", ""),

        TokenId::In => InsertionRule::replace("∈"),
        TokenId::NotIn => InsertionRule::replace("∉"),
        TokenId::Subset => InsertionRule::replace("⊂"),
        TokenId::SubsetOrEq => InsertionRule::replace("⊆"),
        TokenId::NotSubset => InsertionRule::replace("⊄"),
        TokenId::Equal => InsertionRule::replace("="),
        TokenId::NotEqual => InsertionRule::replace("≠"),
        TokenId::GreaterOrEq => InsertionRule::replace("≥"),
        TokenId::LesserOrEq => InsertionRule::replace("≤"),

        TokenId::Union => InsertionRule::replace("∪"),
        TokenId::Intersection => InsertionRule::replace("∩"),
        TokenId::SetMinus => InsertionRule::replace("\\"),
        TokenId::SymmetricMinus => InsertionRule::replace("∆"),
        TokenId::Decart => InsertionRule::replace("×"),

        TokenId::EmptySet => InsertionRule::replace("∅"),
        TokenId::IntegerSet => InsertionRule::replace("Z"),

        TokenId::Boolean => InsertionRule::envelope("ℬ(", ")"),
        TokenId::BigProjection => InsertionRule::envelope("Pr1(", ")"),
        TokenId::SmallProjection => InsertionRule::envelope("pr1(", ")"),
        TokenId::Filter => InsertionRule::envelope("Fi1[](", ")"),
        TokenId::Reduce => InsertionRule::envelope("red(", ")"),
        TokenId::Debool => InsertionRule::envelope("debool(", ")"),
        TokenId::Bool => InsertionRule::envelope("bool(", ")"),
        TokenId::Card => InsertionRule::envelope("card(", ")"),

        TokenId::Declarative => InsertionRule::envelope("D{ξ∈X1 | ", "}"),
        TokenId::Recursive => InsertionRule::envelope("R{ξ:=D1 | ", "}"),
        TokenId::Imperative => InsertionRule::envelope("I{(σ, γ) | ", "}"),

        TokenId::Parentheses => InsertionRule::toggle("(", ")"),
        TokenId::Braces => InsertionRule::toggle("{", "}"),
        TokenId::Brackets => InsertionRule::toggle("[", "]"),

        TokenId::Assign => InsertionRule::replace(":="),
        TokenId::Iterate => InsertionRule::replace(":∈"),
    }
}
