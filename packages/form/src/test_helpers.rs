use models::{Credentials, Field};
use services::authentication::{AuthenticationError, Authenticator};
use services::notification::NotificationLog;

use crate::controller::FormController;
use std::io;
use std::sync::{Arc, Mutex};

pub type TestForm = FormController<NotificationLog, RecordingAuthenticator>;

/// Authenticator that remembers every handoff and answers with a fixed result
#[derive(Debug, Default)]
pub struct RecordingAuthenticator {
    pub received: Vec<Credentials>,
    pub reject_with: Option<AuthenticationError>,
}

impl Authenticator for RecordingAuthenticator {
    fn authenticate(&mut self, credentials: &Credentials) -> Result<(), AuthenticationError> {
        self.received.push(credentials.clone());
        match &self.reject_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub fn create_test_form() -> TestForm {
    FormController::new(NotificationLog::new(), RecordingAuthenticator::default())
}

pub fn create_filled_form(email: &str, password: &str) -> TestForm {
    let mut form = create_test_form();
    form.on_field_change(Field::Email, email);
    form.on_field_change(Field::Password, password);
    form
}

pub fn valid_email() -> String {
    "a@b.com".to_string()
}

pub fn valid_password() -> String {
    "Abc123".to_string()
}

/// Shared buffer a test subscriber writes formatted events into
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with an INFO-level subscriber installed and returns what it logged
pub fn capture_info_logs(f: impl FnOnce()) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}
