//! Result kind inference for instantiated templates
//!
//! A result kind is looked up by the typifications of the supplied arguments
//! first, then by how many arguments are bound.

use std::collections::HashMap;

use crate::verification::ConstituentKind;

use super::substitute::ArgumentBinding;

/// How much of a template's argument list has been supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingPattern {
    NoArguments,
    AllBound,
    PartiallyBound,
    NoneBound,
}

impl BindingPattern {
    pub fn of(bindings: &[ArgumentBinding]) -> Self {
        let bound = bindings.iter().filter(|b| b.is_bound()).count();
        match (bindings.len(), bound) {
            (0, _) => BindingPattern::NoArguments,
            (total, bound) if bound == total => BindingPattern::AllBound,
            (_, 0) => BindingPattern::NoneBound,
            _ => BindingPattern::PartiallyBound,
        }
    }
}

fn default_rule(kind: ConstituentKind, pattern: BindingPattern) -> Option<ConstituentKind> {
    match (kind, pattern) {
        (ConstituentKind::Function | ConstituentKind::Term, BindingPattern::AllBound) => {
            Some(ConstituentKind::Term)
        }
        (ConstituentKind::Predicate, BindingPattern::AllBound) => Some(ConstituentKind::Axiom),
        _ => None,
    }
}

/// Declared typifications of the bound arguments, in declaration order
pub fn supplied_typifications(bindings: &[ArgumentBinding]) -> Vec<String> {
    bindings
        .iter()
        .filter(|b| b.is_bound())
        .map(|b| b.declared_typification.clone())
        .collect()
}

/// Table of result kinds for instantiated templates.
///
/// Lookup order:
/// 1. `(template kind, supplied typifications)` overrides
/// 2. `(template kind, binding pattern)` overrides
/// 3. the built-in rules
/// 4. the template's own kind
#[derive(Debug, Clone, Default)]
pub struct InferenceRules {
    typed: HashMap<(ConstituentKind, Vec<String>), ConstituentKind>,
    overrides: HashMap<(ConstituentKind, BindingPattern), ConstituentKind>,
}

impl InferenceRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override one rule, returning the previous override if any
    pub fn set_rule(
        &mut self,
        kind: ConstituentKind,
        pattern: BindingPattern,
        result: ConstituentKind,
    ) -> Option<ConstituentKind> {
        self.overrides.insert((kind, pattern), result)
    }

    /// Override the result for one exact list of supplied typifications
    pub fn set_typed_rule<I, S>(
        &mut self,
        kind: ConstituentKind,
        typifications: I,
        result: ConstituentKind,
    ) -> Option<ConstituentKind>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = typifications.into_iter().map(Into::into).collect();
        self.typed.insert((kind, key), result)
    }

    pub fn infer(
        &self,
        template_kind: ConstituentKind,
        bindings: &[ArgumentBinding],
    ) -> ConstituentKind {
        let pattern = BindingPattern::of(bindings);
        self.typed
            .get(&(template_kind, supplied_typifications(bindings)))
            .or_else(|| self.overrides.get(&(template_kind, pattern)))
            .copied()
            .or_else(|| default_rule(template_kind, pattern))
            .unwrap_or(template_kind)
    }
}

/// Infer with the built-in rules only
pub fn infer_result_kind(
    template_kind: ConstituentKind,
    bindings: &[ArgumentBinding],
) -> ConstituentKind {
    default_rule(template_kind, BindingPattern::of(bindings)).unwrap_or(template_kind)
}
