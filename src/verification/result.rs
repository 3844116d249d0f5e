//! Checker reports and the verification results derived from them

use serde::{Deserialize, Serialize};

/// Semantic class of a checked expression
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueClass {
    #[default]
    #[serde(alias = "INVALID")]
    Invalid,
    #[serde(alias = "VALUE")]
    Value,
    #[serde(alias = "PROPERTY")]
    Property,
}

/// One error as the checker reports it, positioned in the qualified text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedError {
    pub code: u32,
    #[serde(default)]
    pub is_critical: bool,
    /// Character offset in the qualified text
    #[serde(alias = "position")]
    pub absolute_position: usize,
    #[serde(default)]
    pub params: Vec<String>,
}

/// Wire form of a checker response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckerReport {
    #[serde(default)]
    pub errors: Vec<ReportedError>,
    #[serde(default)]
    pub typification: String,
    #[serde(default)]
    pub value_class: ValueClass,
    #[serde(default)]
    pub ast: serde_json::Value,
    #[serde(default)]
    pub ast_text: String,
}

/// A checker report bound to the exact buffer value it was computed for
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    /// Buffer value (without prefix) that was submitted
    pub requested_value: String,
    /// Prefix length the checker's positions include
    pub prefix_len: usize,
    pub errors: Vec<ReportedError>,
    pub typification: String,
    pub value_class: ValueClass,
    pub ast: serde_json::Value,
    pub ast_text: String,
}

impl VerificationResult {
    pub fn from_report(
        requested_value: impl Into<String>,
        prefix_len: usize,
        report: CheckerReport,
    ) -> Self {
        Self {
            requested_value: requested_value.into(),
            prefix_len,
            errors: report.errors,
            typification: report.typification,
            value_class: report.value_class,
            ast: report.ast,
            ast_text: report.ast_text,
        }
    }

    pub fn has_critical_errors(&self) -> bool {
        self.errors.iter().any(|e| e.is_critical)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
