use serde::Serialize;
use services::authentication::AuthenticationError;
use services::validation::FieldViolation;
use std::fmt;

/// Where the form is in a submission attempt.
///
/// `Valid` and `Invalid` only last until the attempt has been applied; the
/// controller is back in `Idle` whenever `on_submit` returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Valid,
    Invalid,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Valid => "valid",
            SubmissionState::Invalid => "invalid",
        };
        f.write_str(name)
    }
}

/// What a call to `on_submit` did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the credentials went to the authenticator,
    /// whose answer is passed through untouched.
    Accepted(Result<(), AuthenticationError>),
    /// Validation failed with these violations, in rule order
    Rejected(Vec<FieldViolation>),
    /// A submit was already in progress
    Ignored,
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            SubmitOutcome::Rejected(violations) => violations,
            _ => &[],
        }
    }
}
