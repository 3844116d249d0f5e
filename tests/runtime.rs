//! Runtime: commands executed on worker threads, results fed back through update

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{critical_error, report, test_model, ScriptedChecker};
use formula_editor::grammar::TokenId;
use formula_editor::messages::{Msg, ProseMsg};
use formula_editor::model::FocusTarget;
use formula_editor::runtime::Runtime;
use formula_editor::verification::{ConstituentKind, UnavailableChecker, ValueClass};
use formula_editor::ValidityStatus;

const WAIT: Duration = Duration::from_secs(5);

#[test]
fn test_verify_round_trip() {
    let mut failing = report(ValueClass::Invalid, "");
    failing.errors.push(critical_error(0x8406, 6));
    let checker = Arc::new(ScriptedChecker::new().with_report("D1:==∀", failing));

    let mut runtime = Runtime::new(
        test_model("D1", ConstituentKind::Term, ""),
        checker.clone(),
    );
    runtime.dispatch(Msg::insert_token(TokenId::Forall));
    assert_eq!(runtime.dispatch(Msg::verify()), Some(true));
    assert!(runtime.model.has_pending_requests());

    assert!(runtime.wait_idle(WAIT));
    assert_eq!(checker.calls(), vec!["D1:==∀".to_string()]);
    assert_eq!(runtime.model.editor.status(), ValidityStatus::IncorrectSyntax);
    assert_eq!(runtime.model.editor.errors()[0].position, 1);
}

#[test]
fn test_edit_during_check_discards_result() {
    let checker = Arc::new(ScriptedChecker::new().with_delay(Duration::from_millis(50)));
    let mut runtime = Runtime::new(test_model("D1", ConstituentKind::Term, "X1"), checker);

    runtime.dispatch(Msg::verify());
    runtime.dispatch(Msg::direct_edit("X1∪X2"));

    assert!(runtime.wait_idle(WAIT));
    assert!(runtime.model.editor.is_modified());
    assert!(runtime.model.editor.last_result().is_none());
    assert_eq!(runtime.model.editor.status(), ValidityStatus::Unknown);
}

#[test]
fn test_unavailable_checker_leaves_editor_usable() {
    let mut runtime = Runtime::new(
        test_model("D1", ConstituentKind::Term, "X1"),
        Arc::new(UnavailableChecker),
    );

    runtime.dispatch(Msg::verify());
    assert!(runtime.wait_idle(WAIT));
    assert_eq!(runtime.model.notices.len(), 1);
    assert_eq!(runtime.model.editor.status(), ValidityStatus::Unknown);

    runtime.dispatch(Msg::insert_token(TokenId::Union));
    assert_eq!(runtime.model.editor.text(), "X1∪");
}

#[test]
fn test_reference_resolution_round_trip() {
    let payload = serde_json::json!({ "X1": { "kind": "base" } });
    let checker = Arc::new(ScriptedChecker::new().with_references("see X1", payload.clone()));
    let mut runtime = Runtime::new(test_model("D1", ConstituentKind::Term, ""), checker);

    runtime.model.set_focus(Some(FocusTarget::Prose));
    runtime.dispatch(Msg::Prose(ProseMsg::DirectEdit {
        value: "see X1".to_string(),
        selection: None,
    }));
    runtime.dispatch(Msg::Prose(ProseMsg::ResolveReferences));

    assert!(runtime.wait_idle(WAIT));
    let resolution = runtime.model.prose.resolution().unwrap();
    assert_eq!(resolution.payload, payload);
}

#[test]
fn test_reference_failure_becomes_notice() {
    let mut runtime = Runtime::new(
        test_model("D1", ConstituentKind::Term, ""),
        Arc::new(ScriptedChecker::new()),
    );
    runtime.dispatch(Msg::Prose(ProseMsg::ResolveReferences));

    assert!(runtime.wait_idle(WAIT));
    assert!(runtime.model.prose.resolution().is_none());
    assert_eq!(runtime.model.notices.len(), 1);
}

#[test]
fn test_unhandled_keystroke_reports_none() {
    let mut runtime = Runtime::new(
        test_model("D1", ConstituentKind::Term, ""),
        Arc::new(UnavailableChecker),
    );
    runtime.model.set_focus(Some(FocusTarget::Expression));

    let plain = formula_editor::grammar::Keystroke::char('q');
    assert_eq!(runtime.dispatch(Msg::keystroke(plain)), None);
}
