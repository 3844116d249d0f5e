//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use formula_editor::config::EditorConfig;
use formula_editor::grammar::ChordTable;
use formula_editor::messages::{Msg, VerificationMsg};
use formula_editor::model::{AppModel, FocusTarget};
use formula_editor::update::update;
use formula_editor::verification::{
    CheckerError, CheckerReport, ConstituentKind, ExpressionContext, FormalChecker, ReportedError,
    ValueClass, VerificationRequest,
};
use formula_editor::Cmd;

/// Create a model editing `alias` with the given expression and default config
pub fn test_model(alias: &str, kind: ConstituentKind, expression: &str) -> AppModel {
    AppModel::new(
        ExpressionContext::new(alias, kind, expression),
        EditorConfig::default(),
        ChordTable::with_defaults(),
    )
}

/// Model with the expression editor focused and the caret placed
pub fn focused_model(expression: &str, start: usize, end: usize) -> AppModel {
    let mut model = test_model("D1", ConstituentKind::Term, expression);
    model.set_focus(Some(FocusTarget::Expression));
    model.editor.set_selection(start, end);
    model
}

/// Current expression text
pub fn text(model: &AppModel) -> String {
    model.editor.text()
}

/// Selection as a plain tuple for terse assertions
pub fn selection(model: &AppModel) -> (usize, usize) {
    let sel = model.editor.selection();
    (sel.start, sel.end)
}

pub fn report(value_class: ValueClass, typification: &str) -> CheckerReport {
    CheckerReport {
        typification: typification.to_string(),
        value_class,
        ..Default::default()
    }
}

pub fn critical_error(code: u32, absolute_position: usize) -> ReportedError {
    ReportedError {
        code,
        is_critical: true,
        absolute_position,
        params: Vec::new(),
    }
}

pub fn warning(code: u32, absolute_position: usize) -> ReportedError {
    ReportedError {
        code,
        is_critical: false,
        absolute_position,
        params: Vec::new(),
    }
}

/// Issue a verification through `update` and return the request it produced
pub fn request_verification(model: &mut AppModel) -> VerificationRequest {
    match update(model, Msg::verify()) {
        Some(Cmd::Verify(request)) => request,
        other => panic!("expected Cmd::Verify, got {:?}", other),
    }
}

/// Deliver a checker report through `update`
pub fn complete(model: &mut AppModel, request: &VerificationRequest, report: CheckerReport) {
    update(
        model,
        Msg::Verification(VerificationMsg::Completed {
            id: request.id,
            report,
        }),
    );
}

/// In-memory checker answering from a table of qualified texts.
///
/// Unknown texts get an empty VALUE report. Every call is recorded.
#[derive(Default)]
pub struct ScriptedChecker {
    reports: HashMap<String, CheckerReport>,
    references: HashMap<String, serde_json::Value>,
    delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, qualified: &str, report: CheckerReport) -> Self {
        self.reports.insert(qualified.to_string(), report);
        self
    }

    pub fn with_references(mut self, text: &str, payload: serde_json::Value) -> Self {
        self.references.insert(text.to_string(), payload);
        self
    }

    /// Sleep before answering, to keep requests in flight
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.calls.lock().unwrap().push(call);
    }
}

impl FormalChecker for ScriptedChecker {
    fn check(&self, qualified: &str) -> Result<CheckerReport, CheckerError> {
        self.record(qualified.to_string());
        Ok(self
            .reports
            .get(qualified)
            .cloned()
            .unwrap_or_else(|| report(ValueClass::Value, "")))
    }

    fn resolve_references(&self, text: &str) -> Result<serde_json::Value, CheckerError> {
        self.record(text.to_string());
        self.references
            .get(text)
            .cloned()
            .ok_or_else(|| CheckerError::Service {
                status: "404".to_string(),
                message: format!("nothing to resolve in `{text}`"),
            })
    }
}
