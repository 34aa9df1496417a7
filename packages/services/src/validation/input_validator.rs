use super::field_validators::LOGIN_RULES;
use super::violation::{FieldViolation, ValidationResult};
use models::Credentials;

pub trait InputValidator {
    fn validate(&self) -> ValidationResult;

    fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}

impl InputValidator for Credentials {
    fn validate(&self) -> ValidationResult {
        validate(self)
    }
}

/// Runs every login rule against `credentials`.
///
/// Rules are not short-circuited: one call reports every broken rule, in
/// rule order. Pure and deterministic.
pub fn validate(credentials: &Credentials) -> ValidationResult {
    let violations = LOGIN_RULES
        .iter()
        .filter(|rule| !rule.check(credentials))
        .map(|rule| FieldViolation::new(rule.field, rule.message))
        .collect();

    ValidationResult::from_violations(violations)
}
