use std::fmt;

/// Minimum password length, counted in UTF-16 code units like a browser's
/// `String.length`
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Various types of password validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordValidationError {
    /// Password is too short
    TooShort,
    /// Password is missing a lowercase letter
    MissingLowercase,
    /// Password is missing an uppercase letter
    MissingUppercase,
    /// Password is missing a digit
    MissingDigit,
}

impl PasswordValidationError {
    /// Every password rule, in the order the rules are evaluated
    pub const ALL: [PasswordValidationError; 4] = [
        PasswordValidationError::TooShort,
        PasswordValidationError::MissingLowercase,
        PasswordValidationError::MissingUppercase,
        PasswordValidationError::MissingDigit,
    ];

    pub const fn message(&self) -> &'static str {
        match self {
            PasswordValidationError::TooShort => "Password must be at least 6 characters long",
            PasswordValidationError::MissingLowercase => {
                "Password must contain at least one lowercase letter"
            }
            PasswordValidationError::MissingUppercase => {
                "Password must contain at least one uppercase letter"
            }
            PasswordValidationError::MissingDigit => "Password must contain at least one number",
        }
    }

    /// Whether `password` breaks this particular rule
    pub fn is_violated_by(&self, password: &str) -> bool {
        match self {
            PasswordValidationError::TooShort => {
                password.encode_utf16().count() < MIN_PASSWORD_LENGTH
            }
            PasswordValidationError::MissingLowercase => {
                !password.chars().any(|c| c.is_ascii_lowercase())
            }
            PasswordValidationError::MissingUppercase => {
                !password.chars().any(|c| c.is_ascii_uppercase())
            }
            PasswordValidationError::MissingDigit => !password.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

impl fmt::Display for PasswordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PasswordValidationError::*;

    fn validate_password(password: &str) -> Result<(), Vec<PasswordValidationError>> {
        let errors: Vec<PasswordValidationError> = PasswordValidationError::ALL
            .into_iter()
            .filter(|rule| rule.is_violated_by(password))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    #[test]
    fn test_password_length() {
        // Too short
        assert_eq!(validate_password("Ab1"), Err(vec![TooShort]));

        // Exactly the minimum
        assert!(validate_password("Abc123").is_ok());
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // six characters, more than six bytes
        assert!(validate_password("Ab1äöü").is_ok());
        assert_eq!(validate_password("Ab1äö"), Err(vec![TooShort]));

        // five characters, but each emoji is a surrogate pair
        assert!(validate_password("Ab1\u{1F600}\u{1F600}").is_ok());
        assert_eq!(validate_password("Ab1\u{1F600}"), Err(vec![TooShort]));
    }

    #[test]
    fn test_password_lowercase() {
        assert_eq!(validate_password("PASSWORD123"), Err(vec![MissingLowercase]));
        assert!(validate_password("PASSWORd123").is_ok());
    }

    #[test]
    fn test_password_uppercase() {
        assert_eq!(validate_password("password123"), Err(vec![MissingUppercase]));
        assert!(validate_password("Password123").is_ok());
    }

    #[test]
    fn test_password_digits() {
        assert_eq!(validate_password("PasswordNoDigit"), Err(vec![MissingDigit]));
        assert!(validate_password("Password1").is_ok());
    }

    #[test]
    fn test_character_classes_are_ascii_only() {
        // non-ASCII letters and digits do not count
        assert_eq!(
            validate_password("ÀÉÎÕÜ١٢٣"),
            Err(vec![MissingLowercase, MissingUppercase, MissingDigit])
        );
    }

    #[test]
    fn test_all_rules_reported_in_order() {
        assert_eq!(
            validate_password(""),
            Err(vec![TooShort, MissingLowercase, MissingUppercase, MissingDigit])
        );
        assert_eq!(
            validate_password("abc"),
            Err(vec![TooShort, MissingUppercase, MissingDigit])
        );
        assert_eq!(validate_password("!!!!!!!!"), Err(vec![MissingLowercase, MissingUppercase, MissingDigit]));
    }

    #[test]
    fn test_messages() {
        assert_eq!(TooShort.to_string(), "Password must be at least 6 characters long");
        assert_eq!(MissingLowercase.to_string(), "Password must contain at least one lowercase letter");
        assert_eq!(MissingUppercase.to_string(), "Password must contain at least one uppercase letter");
        assert_eq!(MissingDigit.to_string(), "Password must contain at least one number");
    }
}
