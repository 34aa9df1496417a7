use models::Field;
use serde::Serialize;
use std::fmt;

/// A single rule failure tied to one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: Field,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Outcome of one validation run.
///
/// `Invalid` keeps violations in rule-evaluation order and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<FieldViolation>),
}

impl ValidationResult {
    pub fn from_violations(violations: Vec<FieldViolation>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(violations) => violations,
        }
    }

    /// Violations reported against one field, in order
    pub fn violations_for(&self, field: Field) -> impl Iterator<Item = &FieldViolation> {
        self.violations().iter().filter(move |v| v.field == field)
    }

    pub fn into_result(self) -> Result<(), Vec<FieldViolation>> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(violations) => Err(violations),
        }
    }

    /// Get a comma-separated list of all violation messages
    pub fn to_string_list(&self) -> String {
        self.violations()
            .iter()
            .map(|v| v.message.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationResult::Valid => f.write_str("valid"),
            ValidationResult::Invalid(_) => f.write_str(&self.to_string_list()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_violations_are_valid() {
        let result = ValidationResult::from_violations(vec![]);
        assert!(result.is_valid());
        assert!(result.violations().is_empty());
        assert_eq!(result.into_result(), Ok(()));
    }

    #[test]
    fn test_invalid_keeps_order() {
        let violations = vec![
            FieldViolation::new(Field::Email, "Invalid email address"),
            FieldViolation::new(Field::Password, "first"),
            FieldViolation::new(Field::Password, "second"),
        ];
        let result = ValidationResult::from_violations(violations.clone());

        assert!(!result.is_valid());
        assert_eq!(result.violations(), violations.as_slice());
        assert_eq!(
            result.violations_for(Field::Password).map(|v| v.message.as_str()).collect::<Vec<_>>(),
            vec!["first", "second"]
        );
        assert_eq!(result.to_string(), "Invalid email address, first, second");
        assert_eq!(result.into_result(), Err(violations));
    }

    #[test]
    fn test_violation_display() {
        let violation = FieldViolation::new(Field::Email, "Invalid email address");
        assert_eq!(violation.to_string(), "email: Invalid email address");
    }
}
