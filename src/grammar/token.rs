//! Symbolic tokens that can be inserted into a formal expression

use std::fmt;
use std::str::FromStr;

/// One symbolic construct the editor knows how to insert.
///
/// Names (`TokenId::name`) are stable; chord configuration files refer to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenId {
    // ========================================================================
    // Logic
    // ========================================================================
    Negation,
    And,
    Or,
    Implication,
    Equivalence,
    Forall,
    Exists,

    // ========================================================================
    // Set relations
    // ========================================================================
    In,
    NotIn,
    Subset,
    SubsetOrEq,
    NotSubset,
    Equal,
    NotEqual,
    GreaterOrEq,
    LesserOrEq,

    // ========================================================================
    // Set operators
    // ========================================================================
    Union,
    Intersection,
    SetMinus,
    SymmetricMinus,
    Decart,

    // ========================================================================
    // Constants
    // ========================================================================
    EmptySet,
    IntegerSet,

    // ========================================================================
    // Function-style operators
    // ========================================================================
    Boolean,
    BigProjection,
    SmallProjection,
    Filter,
    Reduce,
    Debool,
    Bool,
    Card,

    // ========================================================================
    // Structured expressions
    // ========================================================================
    Declarative,
    Recursive,
    Imperative,

    // ========================================================================
    // Grouping
    // ========================================================================
    Parentheses,
    Braces,
    Brackets,

    // ========================================================================
    // Local binding
    // ========================================================================
    Assign,
    Iterate,
}

impl TokenId {
    /// Every token, in toolbar order
    pub const ALL: &'static [TokenId] = &[
        TokenId::Negation,
        TokenId::And,
        TokenId::Or,
        TokenId::Implication,
        TokenId::Equivalence,
        TokenId::Forall,
        TokenId::Exists,
        TokenId::In,
        TokenId::NotIn,
        TokenId::Subset,
        TokenId::SubsetOrEq,
        TokenId::NotSubset,
        TokenId::Equal,
        TokenId::NotEqual,
        TokenId::GreaterOrEq,
        TokenId::LesserOrEq,
        TokenId::Union,
        TokenId::Intersection,
        TokenId::SetMinus,
        TokenId::SymmetricMinus,
        TokenId::Decart,
        TokenId::EmptySet,
        TokenId::IntegerSet,
        TokenId::Boolean,
        TokenId::BigProjection,
        TokenId::SmallProjection,
        TokenId::Filter,
        TokenId::Reduce,
        TokenId::Debool,
        TokenId::Bool,
        TokenId::Card,
        TokenId::Declarative,
        TokenId::Recursive,
        TokenId::Imperative,
        TokenId::Parentheses,
        TokenId::Braces,
        TokenId::Brackets,
        TokenId::Assign,
        TokenId::Iterate,
    ];

    /// Stable identifier used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            TokenId::Negation => "Negation",
            TokenId::And => "And",
            TokenId::Or => "Or",
            TokenId::Implication => "Implication",
            TokenId::Equivalence => "Equivalence",
            TokenId::Forall => "Forall",
            TokenId::Exists => "Exists",
            TokenId::In => "In",
            TokenId::NotIn => "NotIn",
            TokenId::Subset => "Subset",
            TokenId::SubsetOrEq => "SubsetOrEq",
            TokenId::NotSubset => "NotSubset",
            TokenId::Equal => "Equal",
            TokenId::NotEqual => "NotEqual",
            TokenId::GreaterOrEq => "GreaterOrEq",
            TokenId::LesserOrEq => "LesserOrEq",
            TokenId::Union => "Union",
            TokenId::Intersection => "Intersection",
            TokenId::SetMinus => "SetMinus",
            TokenId::SymmetricMinus => "SymmetricMinus",
            TokenId::Decart => "Decart",
            TokenId::EmptySet => "EmptySet",
            TokenId::IntegerSet => "IntegerSet",
            TokenId::Boolean => "Boolean",
            TokenId::BigProjection => "BigProjection",
            TokenId::SmallProjection => "SmallProjection",
            TokenId::Filter => "Filter",
            TokenId::Reduce => "Reduce",
            TokenId::Debool => "Debool",
            TokenId::Bool => "Bool",
            TokenId::Card => "Card",
            TokenId::Declarative => "Declarative",
            TokenId::Recursive => "Recursive",
            TokenId::Imperative => "Imperative",
            TokenId::Parentheses => "Parentheses",
            TokenId::Braces => "Braces",
            TokenId::Brackets => "Brackets",
            TokenId::Assign => "Assign",
            TokenId::Iterate => "Iterate",
        }
    }

    /// Human-readable label for toolbars and chord listings
    pub fn label(self) -> &'static str {
        match self {
            TokenId::Negation => "negation",
            TokenId::And => "conjunction",
            TokenId::Or => "disjunction",
            TokenId::Implication => "implication",
            TokenId::Equivalence => "equivalence",
            TokenId::Forall => "universal quantifier",
            TokenId::Exists => "existential quantifier",
            TokenId::In => "element of",
            TokenId::NotIn => "not element of",
            TokenId::Subset => "strict subset",
            TokenId::SubsetOrEq => "subset",
            TokenId::NotSubset => "not subset",
            TokenId::Equal => "equals",
            TokenId::NotEqual => "not equals",
            TokenId::GreaterOrEq => "greater or equal",
            TokenId::LesserOrEq => "lesser or equal",
            TokenId::Union => "union",
            TokenId::Intersection => "intersection",
            TokenId::SetMinus => "set difference",
            TokenId::SymmetricMinus => "symmetric difference",
            TokenId::Decart => "Cartesian product",
            TokenId::EmptySet => "empty set",
            TokenId::IntegerSet => "integers",
            TokenId::Boolean => "boolean (power set)",
            TokenId::BigProjection => "set projection",
            TokenId::SmallProjection => "tuple projection",
            TokenId::Filter => "filter",
            TokenId::Reduce => "reduction",
            TokenId::Debool => "debool",
            TokenId::Bool => "singleton",
            TokenId::Card => "cardinality",
            TokenId::Declarative => "declarative definition",
            TokenId::Recursive => "recursive definition",
            TokenId::Imperative => "imperative definition",
            TokenId::Parentheses => "parentheses",
            TokenId::Braces => "braces",
            TokenId::Brackets => "brackets",
            TokenId::Assign => "assignment",
            TokenId::Iterate => "iteration",
        }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenId::ALL
            .iter()
            .copied()
            .find(|token| token.name().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}
