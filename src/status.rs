//! Validity status of an expression
//!
//! Derived on demand from the modified flag and the last accepted result. It is
//! never stored, so it cannot drift from its inputs.

use std::fmt;

use crate::verification::{ValueClass, VerificationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidityStatus {
    /// Never verified, or edited since the last verification
    Unknown,
    VerifiedOk,
    /// Correct, and denotes a property rather than a computable value
    VerifiedProperty,
    /// Parsed, but the checker could not assign it a value
    InvalidValue,
    /// The checker reported at least one critical error
    IncorrectSyntax,
}

impl ValidityStatus {
    pub fn label(self) -> &'static str {
        match self {
            ValidityStatus::Unknown => "unknown",
            ValidityStatus::VerifiedOk => "verified",
            ValidityStatus::VerifiedProperty => "property",
            ValidityStatus::InvalidValue => "invalid value",
            ValidityStatus::IncorrectSyntax => "incorrect syntax",
        }
    }

    pub fn is_verified(self) -> bool {
        matches!(
            self,
            ValidityStatus::VerifiedOk | ValidityStatus::VerifiedProperty
        )
    }
}

impl fmt::Display for ValidityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rules are checked in order; the first match wins.
pub fn resolve(modified: bool, last_result: Option<&VerificationResult>) -> ValidityStatus {
    if modified {
        return ValidityStatus::Unknown;
    }
    let Some(result) = last_result else {
        return ValidityStatus::Unknown;
    };
    if result.has_critical_errors() {
        return ValidityStatus::IncorrectSyntax;
    }
    match result.value_class {
        ValueClass::Invalid => ValidityStatus::InvalidValue,
        ValueClass::Property => ValidityStatus::VerifiedProperty,
        ValueClass::Value => ValidityStatus::VerifiedOk,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verification::{CheckerReport, ReportedError};

    fn result(errors: &[bool], value_class: ValueClass) -> VerificationResult {
        let report = CheckerReport {
            errors: errors
                .iter()
                .enumerate()
                .map(|(i, &is_critical)| ReportedError {
                    code: i as u32,
                    is_critical,
                    absolute_position: 0,
                    params: vec![],
                })
                .collect(),
            value_class,
            ..Default::default()
        };
        VerificationResult::from_report("X1", 5, report)
    }

    #[test]
    fn test_no_result_is_unknown() {
        assert_eq!(resolve(false, None), ValidityStatus::Unknown);
        assert_eq!(resolve(true, None), ValidityStatus::Unknown);
    }

    #[test]
    fn test_modified_is_unknown_whatever_the_result() {
        let r = result(&[true], ValueClass::Value);
        assert_eq!(resolve(true, Some(&r)), ValidityStatus::Unknown);
    }

    #[test]
    fn test_critical_beats_value_class() {
        let r = result(&[false, true], ValueClass::Property);
        assert_eq!(resolve(false, Some(&r)), ValidityStatus::IncorrectSyntax);
    }

    #[test]
    fn test_invalid_value_class() {
        let r = result(&[false], ValueClass::Invalid);
        assert_eq!(resolve(false, Some(&r)), ValidityStatus::InvalidValue);
    }

    #[test]
    fn test_property_value_class() {
        let r = result(&[], ValueClass::Property);
        assert_eq!(resolve(false, Some(&r)), ValidityStatus::VerifiedProperty);
    }

    #[test]
    fn test_noncritical_errors_still_verified() {
        let r = result(&[false], ValueClass::Value);
        assert_eq!(resolve(false, Some(&r)), ValidityStatus::VerifiedOk);
    }

    #[test]
    fn test_every_combination_resolves() {
        for modified in [false, true] {
            for class in [ValueClass::Invalid, ValueClass::Value, ValueClass::Property] {
                for errors in [&[][..], &[false][..], &[true][..]] {
                    let r = result(errors, class);
                    let status = resolve(modified, Some(&r));
                    assert_eq!(modified, status == ValidityStatus::Unknown);
                }
            }
        }
    }
}
