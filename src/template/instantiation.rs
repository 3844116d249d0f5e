//! Interactive instantiation of a template constituent

use serde::{Deserialize, Serialize};

use crate::editable::EditableState;
use crate::model::ExpressionEditor;
use crate::verification::{ConstituentKind, ExpressionContext};

use super::inference::InferenceRules;
use super::substitute::{instantiate, ArgumentBinding};

/// Declared argument of a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateArgument {
    pub alias: String,
    pub typification: String,
}

/// A stored parametrized constituent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub alias: String,
    pub kind: ConstituentKind,
    pub expression: String,
    #[serde(default)]
    pub arguments: Vec<TemplateArgument>,
}

/// One in-progress instantiation: the template plus an editable value per argument
#[derive(Debug)]
pub struct TemplateInstantiation {
    template: Template,
    values: Vec<EditableState>,
}

impl TemplateInstantiation {
    pub fn new(template: Template) -> Self {
        let values = template
            .arguments
            .iter()
            .map(|_| EditableState::from_text(""))
            .collect();
        Self { template, values }
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn argument_count(&self) -> usize {
        self.values.len()
    }

    fn index_of(&self, alias: &str) -> Option<usize> {
        self.template.arguments.iter().position(|a| a.alias == alias)
    }

    pub fn argument_field(&self, index: usize) -> Option<&EditableState> {
        self.values.get(index)
    }

    /// Editable value of one argument, for token insertion and typing
    pub fn argument_field_mut(&mut self, index: usize) -> Option<&mut EditableState> {
        self.values.get_mut(index)
    }

    /// Replace an argument's value. Returns false for an unknown alias.
    pub fn set_argument_value(&mut self, alias: &str, value: &str) -> bool {
        let Some(field) = self.index_of(alias).and_then(|i| self.values.get_mut(i)) else {
            return false;
        };
        field.apply_external_edit(value, None);
        true
    }

    /// Current bindings, rebuilt from the argument fields on every call
    pub fn bindings(&self) -> Vec<ArgumentBinding> {
        self.template
            .arguments
            .iter()
            .zip(&self.values)
            .map(|(arg, field)| {
                ArgumentBinding::new(arg.alias.clone(), arg.typification.clone(), field.text())
            })
            .collect()
    }

    pub fn is_fully_bound(&self) -> bool {
        self.values.iter().all(|field| field.len_chars() > 0)
    }

    /// Expression a commit would produce with the current values
    pub fn preview(&self) -> String {
        instantiate(&self.template.expression, &self.bindings())
    }

    pub fn inferred_kind(&self, rules: &InferenceRules) -> ConstituentKind {
        rules.infer(self.template.kind, &self.bindings())
    }

    /// Finish the workflow, producing an editor for the new constituent
    pub fn commit(
        self,
        alias: impl Into<String>,
        rules: &InferenceRules,
        history_limit: usize,
    ) -> ExpressionEditor {
        let kind = self.inferred_kind(rules);
        let context = ExpressionContext::new(alias, kind, self.preview());
        tracing::info!(
            template = %self.template.alias,
            alias = %context.alias,
            %kind,
            "template instantiated"
        );
        ExpressionEditor::new(context).with_history_limit(history_limit)
    }

    /// Abandon the workflow
    pub fn cancel(self) {
        tracing::debug!(template = %self.template.alias, "template instantiation cancelled");
    }
}
