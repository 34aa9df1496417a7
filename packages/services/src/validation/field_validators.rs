use super::email::is_email_shaped;
use super::password::PasswordValidationError;
use models::{Credentials, Field};

/// One login rule: the field it reports against, the message shown when it
/// fails and a pure predicate that holds when the input is acceptable.
#[derive(Clone, Copy)]
pub struct FieldRule {
    pub field: Field,
    pub message: &'static str,
    pub passes: fn(&Credentials) -> bool,
}

impl FieldRule {
    pub fn check(&self, credentials: &Credentials) -> bool {
        (self.passes)(credentials)
    }
}

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email address";

/// Rules in evaluation order. Violations are reported in this order, so the
/// password rules must stay length, lowercase, uppercase, digit.
pub static LOGIN_RULES: [FieldRule; 5] = [
    FieldRule {
        field: Field::Email,
        message: INVALID_EMAIL_MESSAGE,
        passes: email_is_valid,
    },
    FieldRule {
        field: Field::Password,
        message: PasswordValidationError::TooShort.message(),
        passes: password_is_long_enough,
    },
    FieldRule {
        field: Field::Password,
        message: PasswordValidationError::MissingLowercase.message(),
        passes: password_has_lowercase,
    },
    FieldRule {
        field: Field::Password,
        message: PasswordValidationError::MissingUppercase.message(),
        passes: password_has_uppercase,
    },
    FieldRule {
        field: Field::Password,
        message: PasswordValidationError::MissingDigit.message(),
        passes: password_has_digit,
    },
];

fn email_is_valid(credentials: &Credentials) -> bool {
    is_email_shaped(&credentials.email)
}

fn password_is_long_enough(credentials: &Credentials) -> bool {
    !PasswordValidationError::TooShort.is_violated_by(&credentials.password)
}

fn password_has_lowercase(credentials: &Credentials) -> bool {
    !PasswordValidationError::MissingLowercase.is_violated_by(&credentials.password)
}

fn password_has_uppercase(credentials: &Credentials) -> bool {
    !PasswordValidationError::MissingUppercase.is_violated_by(&credentials.password)
}

fn password_has_digit(credentials: &Credentials) -> bool {
    !PasswordValidationError::MissingDigit.is_violated_by(&credentials.password)
}
