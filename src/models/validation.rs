//! Validation result taxonomy and shared check helpers
//!
//! Every attribute check in the model layer returns `Result<T, Violation>`;
//! the `Ok` arm stands for "no constraint violated". Checks are pure
//! functions of their inputs plus current registry contents and never
//! mutate state themselves. Setters treat any `Err` as a failure: the
//! assignment is aborted and the violation propagates to the caller.

use thiserror::Error;

/// A constraint violation detected by an attribute check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A required value is missing
    #[error("{0}")]
    Mandatory(String),

    /// A value is present but outside its allowed domain or shape
    #[error("{0}")]
    Range(String),

    /// A value collides with an existing identifier
    #[error("{0}")]
    Uniqueness(String),

    /// An attempt to change or unset an immutable-after-set value
    #[error("{0}")]
    Frozen(String),

    /// Any other constraint violation, e.g. a segment field supplied
    /// when the current category does not permit it
    #[error("{0}")]
    Constraint(String),
}

impl Violation {
    /// A mandatory-value violation with the given message
    pub fn mandatory(message: impl Into<String>) -> Self {
        Self::Mandatory(message.into())
    }

    /// A range violation with the given message
    pub fn range(message: impl Into<String>) -> Self {
        Self::Range(message.into())
    }

    /// A uniqueness violation with the given message
    pub fn uniqueness(message: impl Into<String>) -> Self {
        Self::Uniqueness(message.into())
    }

    /// A frozen-value violation with the given message
    pub fn frozen(message: impl Into<String>) -> Self {
        Self::Frozen(message.into())
    }

    /// A generic constraint violation with the given message
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::Constraint(message.into())
    }

    /// Short label for the violation kind, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Mandatory(_) => "MandatoryValueViolation",
            Self::Range(_) => "RangeViolation",
            Self::Uniqueness(_) => "UniquenessViolation",
            Self::Frozen(_) => "FrozenValueViolation",
            Self::Constraint(_) => "ConstraintViolation",
        }
    }
}

/// Result alias for attribute checks
pub type CheckResult<T = ()> = Result<T, Violation>;

/// Coerce a raw form value into a positive integer.
///
/// `what` names the attribute for the violation message, e.g. "movie ID".
pub(crate) fn parse_positive_int(raw: &str, what: &str) -> CheckResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(Violation::range(format!(
            "The {what} must be a positive integer!"
        ))),
    }
}

/// Check a mandatory string attribute: absent or empty input is a
/// mandatory-value violation, a blank (whitespace-only) value a range
/// violation.
pub(crate) fn check_required_string(value: Option<&str>, what: &str) -> CheckResult<String> {
    match value {
        None => Err(Violation::mandatory(format!("A {what} must be provided!"))),
        Some(s) if s.is_empty() => Err(Violation::mandatory(format!("A {what} must be provided!"))),
        Some(s) if s.trim().is_empty() => Err(Violation::range(format!(
            "The {what} must be a non-empty string!"
        ))),
        Some(s) => Ok(s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_int_coercion() {
        assert_eq!(parse_positive_int("42", "movie ID"), Ok(42));
        assert_eq!(parse_positive_int(" 7 ", "movie ID"), Ok(7));
        assert!(matches!(
            parse_positive_int("0", "movie ID"),
            Err(Violation::Range(_))
        ));
        assert!(matches!(
            parse_positive_int("-3", "movie ID"),
            Err(Violation::Range(_))
        ));
        assert!(matches!(
            parse_positive_int("abc", "movie ID"),
            Err(Violation::Range(_))
        ));
    }

    #[test]
    fn required_string_checks() {
        assert_eq!(
            check_required_string(Some("Pulp Fiction"), "title"),
            Ok("Pulp Fiction".to_string())
        );
        assert!(matches!(
            check_required_string(None, "title"),
            Err(Violation::Mandatory(_))
        ));
        assert!(matches!(
            check_required_string(Some(""), "title"),
            Err(Violation::Mandatory(_))
        ));
        assert!(matches!(
            check_required_string(Some("   "), "title"),
            Err(Violation::Range(_))
        ));
    }
}
