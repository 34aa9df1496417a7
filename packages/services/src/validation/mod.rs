pub mod email;
pub mod field_validators;
pub mod input_validator;
pub mod password;
pub mod violation;

// Re-export common types and functions
pub use email::is_email_shaped;
pub use field_validators::{FieldRule, LOGIN_RULES};
pub use input_validator::{validate, InputValidator};
pub use password::{PasswordValidationError, MIN_PASSWORD_LENGTH};
pub use violation::{FieldViolation, ValidationResult};
