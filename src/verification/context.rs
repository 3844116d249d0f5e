//! Constituent kinds and the qualifier prefix sent with every check

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of schema constituent an expression defines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstituentKind {
    Base,
    Constant,
    Structure,
    Axiom,
    Term,
    Function,
    Predicate,
    Theorem,
}

impl ConstituentKind {
    pub const ALL: [ConstituentKind; 8] = [
        ConstituentKind::Base,
        ConstituentKind::Constant,
        ConstituentKind::Structure,
        ConstituentKind::Axiom,
        ConstituentKind::Term,
        ConstituentKind::Function,
        ConstituentKind::Predicate,
        ConstituentKind::Theorem,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ConstituentKind::Base => "base",
            ConstituentKind::Constant => "constant",
            ConstituentKind::Structure => "structure",
            ConstituentKind::Axiom => "axiom",
            ConstituentKind::Term => "term",
            ConstituentKind::Function => "function",
            ConstituentKind::Predicate => "predicate",
            ConstituentKind::Theorem => "theorem",
        }
    }

    /// Separator between alias and expression in the qualified form.
    ///
    /// Sets (base, constant, structure) are typed with `::=`; everything that
    /// is defined by a formula uses `:==`.
    pub fn separator(self) -> &'static str {
        match self {
            ConstituentKind::Base | ConstituentKind::Constant | ConstituentKind::Structure => "::=",
            ConstituentKind::Axiom
            | ConstituentKind::Term
            | ConstituentKind::Function
            | ConstituentKind::Predicate
            | ConstituentKind::Theorem => ":==",
        }
    }

    /// Template kinds take arguments and can be instantiated
    pub fn is_template(self) -> bool {
        matches!(self, ConstituentKind::Function | ConstituentKind::Predicate)
    }
}

impl fmt::Display for ConstituentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ConstituentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConstituentKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown constituent kind: {s}"))
    }
}

/// Schema-level context of the expression being edited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionContext {
    pub alias: String,
    pub kind: ConstituentKind,
    pub raw_expression: String,
}

impl ExpressionContext {
    pub fn new(
        alias: impl Into<String>,
        kind: ConstituentKind,
        raw_expression: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            kind,
            raw_expression: raw_expression.into(),
        }
    }

    /// `alias` followed by the kind's separator
    pub fn prefix(&self) -> String {
        format!("{}{}", self.alias, self.kind.separator())
    }

    /// Prefix length in characters, the unit checker positions are reported in
    pub fn prefix_len(&self) -> usize {
        self.alias.chars().count() + self.kind.separator().chars().count()
    }

    /// Full text submitted to the checker
    pub fn qualified(&self) -> String {
        format!("{}{}", self.prefix(), self.raw_expression)
    }
}
