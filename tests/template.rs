//! Template substitution, kind inference and the instantiation workflow

mod common;

use common::{complete, critical_error, report, request_verification, test_model};
use formula_editor::grammar::{KeyCode, Keystroke, Modifiers, TokenId};
use formula_editor::messages::{Msg, TemplateMsg, UiMsg, VerificationMsg};
use formula_editor::model::FocusTarget;
use formula_editor::template::{
    infer_result_kind, substitute, ArgumentBinding, BindingPattern, InferenceRules, Template,
    TemplateArgument,
};
use formula_editor::update::update;
use formula_editor::verification::{
    CheckerError, CheckerReport, ConstituentKind, ValueClass, VerificationRequest,
};
use formula_editor::{AppModel, Cmd, ValidityStatus};

fn union_function() -> Template {
    Template {
        alias: "F1".to_string(),
        kind: ConstituentKind::Function,
        expression: "[R1∈ℬ(X1), R10∈ℬ(X1)] R1∪R10".to_string(),
        arguments: vec![
            TemplateArgument {
                alias: "R1".to_string(),
                typification: "ℬ(X1)".to_string(),
            },
            TemplateArgument {
                alias: "R10".to_string(),
                typification: "ℬ(X1)".to_string(),
            },
        ],
    }
}

fn bind(alias: &str, value: &str) -> ArgumentBinding {
    ArgumentBinding::new(alias, "", value)
}

// ========================================================================
// Substitution
// ========================================================================

#[test]
fn test_substitute_whole_identifiers_only() {
    let out = substitute("R1∪R10", &[bind("R1", "X1"), bind("R10", "X2")]);
    assert_eq!(out, "X1∪X2");
}

#[test]
fn test_substituted_values_are_not_rescanned() {
    let out = substitute("R1∪R2", &[bind("R1", "R2"), bind("R2", "X1")]);
    assert_eq!(out, "R2∪X1");
}

#[test]
fn test_empty_bindings_leave_template_unchanged() {
    let template = "[α∈R1] α∪R1";
    let out = substitute(template, &[bind("R1", ""), bind("R2", "")]);
    assert_eq!(out, template);
}

#[test]
fn test_substitution_is_deterministic() {
    let bindings = [bind("R1", "X1×X2"), bind("R10", "∅")];
    let first = substitute("R1\\R10", &bindings);
    assert_eq!(first, substitute("R1\\R10", &bindings));
}

#[test]
fn test_identifier_inside_longer_name_untouched() {
    let out = substitute("D10 ∪ D1 ∪ D1_x", &[bind("D1", "X1")]);
    assert_eq!(out, "D10 ∪ X1 ∪ D1_x");
}

// ========================================================================
// Inference
// ========================================================================

#[test]
fn test_binding_patterns() {
    assert_eq!(BindingPattern::of(&[]), BindingPattern::NoArguments);
    assert_eq!(
        BindingPattern::of(&[bind("R1", "X1"), bind("R2", "X2")]),
        BindingPattern::AllBound
    );
    assert_eq!(
        BindingPattern::of(&[bind("R1", "X1"), bind("R2", "")]),
        BindingPattern::PartiallyBound
    );
    assert_eq!(
        BindingPattern::of(&[bind("R1", ""), bind("R2", "")]),
        BindingPattern::NoneBound
    );
}

#[test]
fn test_default_inference() {
    let all = [bind("R1", "X1")];
    let partial = [bind("R1", "X1"), bind("R2", "")];

    assert_eq!(
        infer_result_kind(ConstituentKind::Function, &all),
        ConstituentKind::Term
    );
    assert_eq!(
        infer_result_kind(ConstituentKind::Predicate, &all),
        ConstituentKind::Axiom
    );
    assert_eq!(
        infer_result_kind(ConstituentKind::Function, &partial),
        ConstituentKind::Function
    );
    assert_eq!(
        infer_result_kind(ConstituentKind::Predicate, &partial),
        ConstituentKind::Predicate
    );
}

#[test]
fn test_override_takes_precedence() {
    let mut rules = InferenceRules::new();
    assert_eq!(
        rules.set_rule(
            ConstituentKind::Predicate,
            BindingPattern::AllBound,
            ConstituentKind::Theorem
        ),
        None
    );

    let all = [bind("R1", "X1")];
    assert_eq!(
        rules.infer(ConstituentKind::Predicate, &all),
        ConstituentKind::Theorem
    );
    assert_eq!(
        rules.infer(ConstituentKind::Function, &all),
        ConstituentKind::Term
    );
}

// ========================================================================
// Workflow through update
// ========================================================================

#[test]
fn test_begin_focuses_first_argument() {
    let mut model = test_model("D1", ConstituentKind::Term, "");
    update(&mut model, Msg::Template(TemplateMsg::Begin(union_function())));

    assert_eq!(model.focus(), Some(FocusTarget::Argument(0)));
    assert_eq!(model.instantiation.as_ref().unwrap().argument_count(), 2);
}

#[test]
fn test_begin_rejects_non_template() {
    let mut model = test_model("D1", ConstituentKind::Term, "");
    let mut template = union_function();
    template.kind = ConstituentKind::Term;

    update(&mut model, Msg::Template(TemplateMsg::Begin(template)));
    assert!(model.instantiation.is_none());
    assert_eq!(model.notices.len(), 1);
}

#[test]
fn test_argument_chords_use_symbolic_table() {
    let mut model = test_model("D1", ConstituentKind::Term, "");
    update(&mut model, Msg::Template(TemplateMsg::Begin(union_function())));

    let boolean = Keystroke::char_with_mods('b', Modifiers::ALT | Modifiers::SHIFT);
    let cmd = update(&mut model, Msg::Ui(UiMsg::Keystroke(boolean)));
    assert_eq!(cmd, Some(Cmd::Redraw));

    let field = model.instantiation.as_ref().unwrap().argument_field(0).unwrap();
    assert_eq!(field.text(), "ℬ()");
}

#[test]
fn test_argument_keystroke_commands_are_swallowed() {
    let mut model = test_model("D1", ConstituentKind::Term, "");
    update(&mut model, Msg::Template(TemplateMsg::Begin(union_function())));

    let verify = Keystroke::new(KeyCode::Enter, Modifiers::cmd());
    assert_eq!(update(&mut model, Msg::keystroke(verify)), Some(Cmd::None));
    assert!(!model.editor.is_verifying());
}

#[test]
fn test_commit_replaces_editor_with_inferred_kind() {
    let mut model = test_model("D1", ConstituentKind::Term, "X1");
    update(&mut model, Msg::Template(TemplateMsg::Begin(union_function())));
    update(
        &mut model,
        Msg::Template(TemplateMsg::SetArgument {
            alias: "R1".to_string(),
            value: "X1".to_string(),
        }),
    );
    update(
        &mut model,
        Msg::Template(TemplateMsg::InsertToken {
            index: 1,
            token: TokenId::EmptySet,
        }),
    );
    assert!(model.instantiation.as_ref().unwrap().is_fully_bound());

    update(
        &mut model,
        Msg::Template(TemplateMsg::Commit {
            alias: "D2".to_string(),
        }),
    );

    assert!(model.instantiation.is_none());
    assert_eq!(model.editor.alias(), "D2");
    assert_eq!(model.editor.kind(), ConstituentKind::Term);
    assert_eq!(model.editor.text(), "X1∪∅");
    assert_eq!(model.editor.status(), ValidityStatus::Unknown);
    assert_eq!(model.focus(), Some(FocusTarget::Expression));

    let request = request_verification(&mut model);
    assert!(request.qualified.starts_with("D2:=="));
}

/// Bind both arguments of `union_function` and commit it as D2
fn commit_union(model: &mut AppModel) {
    update(model, Msg::Template(TemplateMsg::Begin(union_function())));
    for (alias, value) in [("R1", "X1"), ("R10", "X2")] {
        update(
            model,
            Msg::Template(TemplateMsg::SetArgument {
                alias: alias.to_string(),
                value: value.to_string(),
            }),
        );
    }
    update(
        model,
        Msg::Template(TemplateMsg::Commit {
            alias: "D2".to_string(),
        }),
    );
}

fn fail(model: &mut AppModel, request: &VerificationRequest) {
    update(
        model,
        Msg::Verification(VerificationMsg::Failed {
            id: request.id,
            error: CheckerError::Unavailable,
        }),
    );
}

#[test]
fn test_late_response_for_replaced_editor_is_ignored() {
    let mut model = test_model("D1", ConstituentKind::Term, "X1");
    let old = request_verification(&mut model);

    commit_union(&mut model);
    assert_eq!(model.editor.text(), "X1∪X2");
    let new = request_verification(&mut model);
    assert_ne!(old.id, new.id);

    let broken = CheckerReport {
        errors: vec![critical_error(34, 3)],
        ..report(ValueClass::Value, "")
    };
    complete(&mut model, &old, broken);
    assert!(model.editor.last_result().is_none());
    assert_eq!(model.editor.status(), ValidityStatus::Unknown);
    assert!(model.editor.is_verifying());

    complete(&mut model, &new, report(ValueClass::Value, "ℬ(X1)"));
    assert_eq!(model.editor.status(), ValidityStatus::VerifiedOk);
    assert!(!model.editor.is_verifying());
}

#[test]
fn test_late_failure_for_replaced_editor_is_silent() {
    let mut model = test_model("D1", ConstituentKind::Term, "X1");
    let old = request_verification(&mut model);

    commit_union(&mut model);
    let new = request_verification(&mut model);

    fail(&mut model, &old);
    assert!(model.notices.is_empty());
    assert!(model.editor.is_verifying());

    fail(&mut model, &new);
    assert_eq!(model.notices.len(), 1);
    assert!(!model.editor.is_verifying());
}

#[test]
fn test_partial_commit_keeps_template_kind() {
    let mut model = test_model("D1", ConstituentKind::Term, "");
    update(&mut model, Msg::Template(TemplateMsg::Begin(union_function())));
    update(
        &mut model,
        Msg::Template(TemplateMsg::SetArgument {
            alias: "R10".to_string(),
            value: "X2".to_string(),
        }),
    );
    update(
        &mut model,
        Msg::Template(TemplateMsg::Commit {
            alias: "F2".to_string(),
        }),
    );

    assert_eq!(model.editor.kind(), ConstituentKind::Function);
    assert_eq!(model.editor.text(), "[R1∈ℬ(X1)] R1∪X2");
}

#[test]
fn test_unknown_argument_alias_ignored() {
    let mut model = test_model("D1", ConstituentKind::Term, "");
    update(&mut model, Msg::Template(TemplateMsg::Begin(union_function())));

    let cmd = update(
        &mut model,
        Msg::Template(TemplateMsg::SetArgument {
            alias: "R2".to_string(),
            value: "X1".to_string(),
        }),
    );
    assert_eq!(cmd, None);
}

#[test]
fn test_cancel_clears_argument_focus() {
    let mut model = test_model("D1", ConstituentKind::Term, "X1");
    update(&mut model, Msg::Template(TemplateMsg::Begin(union_function())));
    update(&mut model, Msg::Template(TemplateMsg::Cancel));

    assert!(model.instantiation.is_none());
    assert_eq!(model.focus(), None);
    assert_eq!(model.editor.alias(), "D1");
    assert_eq!(model.editor.text(), "X1");
}
