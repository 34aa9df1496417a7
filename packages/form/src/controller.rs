use crate::error_state::ErrorState;
use crate::state::{SubmissionState, SubmitOutcome};
use models::{Credentials, Field};
use serde::Serialize;
use services::authentication::Authenticator;
use services::notification::Notifier;
use services::validation::{validate, FieldViolation, ValidationResult};
use uuid::Uuid;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Logged in successfully!";

/// Snapshot handed to the presentation for rendering. Never carries the password.
#[derive(Debug, Serialize)]
pub struct FormView<'a> {
    pub form_id: Uuid,
    pub email: &'a str,
    pub errors: &'a ErrorState,
    pub state: SubmissionState,
}

/// State of one mounted login form.
///
/// Created when the form mounts and dropped when it unmounts. It buffers the
/// raw input, validates on submit, keeps the inline errors and pushes
/// notifications to `N`. Credentials that pass validation go to `A`.
pub struct FormController<N, A> {
    form_id: Uuid,
    credentials: Credentials,
    errors: ErrorState,
    state: SubmissionState,
    notifier: N,
    authenticator: A,
}

impl<N: Notifier, A: Authenticator> FormController<N, A> {
    pub fn new(notifier: N, authenticator: A) -> Self {
        let form_id = Uuid::new_v4();
        tracing::debug!(form_id = %form_id, "login form mounted");
        Self {
            form_id,
            credentials: Credentials::default(),
            errors: ErrorState::new(),
            state: SubmissionState::Idle,
            notifier,
            authenticator,
        }
    }

    /// Store a keystroke. Inline errors stay as they are until the next submit.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        self.credentials.set(field, value);
        tracing::debug!(form_id = %self.form_id, field = %field, "field changed");
    }

    /// Validate the buffered input and apply the result.
    ///
    /// Runs to completion before returning; a submit that arrives while the
    /// form is not idle does nothing.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        if self.state != SubmissionState::Idle {
            tracing::warn!(form_id = %self.form_id, state = %self.state, "submit ignored: form is busy");
            return SubmitOutcome::Ignored;
        }

        self.transition(SubmissionState::Submitting);

        let outcome = match validate(&self.credentials) {
            ValidationResult::Valid => {
                self.transition(SubmissionState::Valid);
                self.accept()
            }
            ValidationResult::Invalid(violations) => {
                self.transition(SubmissionState::Invalid);
                self.reject(violations)
            }
        };

        self.transition(SubmissionState::Idle);
        outcome
    }

    fn accept(&mut self) -> SubmitOutcome {
        self.errors.clear();
        self.notifier.notify_success(LOGIN_SUCCESS_MESSAGE);
        tracing::info!(form_id = %self.form_id, "login submit accepted");

        let result = self.authenticator.authenticate(&self.credentials);
        if let Err(ref e) = result {
            tracing::warn!(form_id = %self.form_id, error = %e, "authentication handoff failed");
        }
        SubmitOutcome::Accepted(result)
    }

    fn reject(&mut self, violations: Vec<FieldViolation>) -> SubmitOutcome {
        self.errors = ErrorState::from_violations(&violations);
        for violation in &violations {
            self.notifier.notify_error(&violation.message);
        }
        tracing::warn!(
            form_id = %self.form_id,
            violations = violations.len(),
            "login submit rejected"
        );
        SubmitOutcome::Rejected(violations)
    }

    fn transition(&mut self, next: SubmissionState) {
        tracing::trace!(form_id = %self.form_id, from = %self.state, to = %next, "submission state");
        self.state = next;
    }
}

impl<N, A> FormController<N, A> {
    /// External reset: forget the input and any inline errors
    pub fn reset(&mut self) {
        self.credentials.clear();
        self.errors.clear();
        self.state = SubmissionState::Idle;
        tracing::debug!(form_id = %self.form_id, "login form reset");
    }

    pub fn form_id(&self) -> Uuid {
        self.form_id
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Inline message for `field`, if it currently has one
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.message(field)
    }

    /// Whether `field` should be drawn with an error cue
    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains(field)
    }

    pub fn view(&self) -> FormView<'_> {
        FormView {
            form_id: self.form_id,
            email: &self.credentials.email,
            errors: &self.errors,
            state: self.state,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn authenticator(&self) -> &A {
        &self.authenticator
    }
}
