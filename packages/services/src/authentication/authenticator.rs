use models::Credentials;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadCredentialsError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableError {
    pub message: String,
}

/// Failure reported by whatever performs the real sign-in.
///
/// The form core never interprets these; it only returns them to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    BadCredentials(BadCredentialsError),
    Unavailable(UnavailableError),
}

impl AuthenticationError {
    pub fn bad_credentials(message: &str) -> Self {
        AuthenticationError::BadCredentials(BadCredentialsError {
            message: message.to_string(),
        })
    }

    pub fn unavailable(message: &str) -> Self {
        AuthenticationError::Unavailable(UnavailableError {
            message: message.to_string(),
        })
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthenticationError::BadCredentials(e) => f.write_str(e.message.as_str()),
            AuthenticationError::Unavailable(e) => f.write_str(e.message.as_str()),
        }
    }
}

impl std::error::Error for AuthenticationError {}

/// Receives credentials once they have passed validation
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Authenticator {
    fn authenticate(&mut self, credentials: &Credentials) -> Result<(), AuthenticationError>;
}

impl<A: Authenticator + ?Sized> Authenticator for &mut A {
    fn authenticate(&mut self, credentials: &Credentials) -> Result<(), AuthenticationError> {
        (**self).authenticate(credentials)
    }
}

impl<A: Authenticator + ?Sized> Authenticator for Box<A> {
    fn authenticate(&mut self, credentials: &Credentials) -> Result<(), AuthenticationError> {
        (**self).authenticate(credentials)
    }
}
