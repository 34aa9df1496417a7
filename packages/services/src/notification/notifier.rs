use serde::Serialize;
use std::fmt;

/// Transient, non-blocking user-facing messages.
///
/// Implementations decide how messages are shown and dismissed; callers only
/// push them.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait Notifier {
    fn notify_error(&mut self, message: &str);
    fn notify_success(&mut self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify_error(&mut self, message: &str) {
        (**self).notify_error(message)
    }

    fn notify_success(&mut self, message: &str) {
        (**self).notify_success(message)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify_error(&mut self, message: &str) {
        (**self).notify_error(message)
    }

    fn notify_success(&mut self, message: &str) {
        (**self).notify_success(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notification {
    Error(String),
    Success(String),
}

impl Notification {
    pub fn message(&self) -> &str {
        match self {
            Notification::Error(message) | Notification::Success(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error(_))
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Error(message) => write!(f, "[error] {}", message),
            Notification::Success(message) => write!(f, "[ok] {}", message),
        }
    }
}

/// Notifier that keeps every notification in emission order until drained
#[derive(Debug, Default, Clone)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(Notification::message).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand pending notifications to the presentation and forget them
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }
}

impl Notifier for NotificationLog {
    fn notify_error(&mut self, message: &str) {
        self.entries.push(Notification::Error(message.to_string()));
    }

    fn notify_success(&mut self, message: &str) {
        self.entries.push(Notification::Success(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_emission_order() {
        let mut log = NotificationLog::new();
        log.notify_error("first");
        log.notify_success("second");
        log.notify_error("first");

        assert_eq!(
            log.entries(),
            &[
                Notification::Error("first".to_string()),
                Notification::Success("second".to_string()),
                Notification::Error("first".to_string()),
            ]
        );
        assert_eq!(log.messages(), vec!["first", "second", "first"]);
    }

    #[test]
    fn test_drain_empties_log() {
        let mut log = NotificationLog::new();
        log.notify_success("done");

        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(!drained[0].is_error());
        assert!(log.is_empty());
    }

    #[test]
    fn test_notifier_through_mutable_reference() {
        fn push_error<N: Notifier>(mut notifier: N) {
            notifier.notify_error("via reference");
        }

        let mut log = NotificationLog::new();
        push_error(&mut log);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_notification_display_and_json() {
        let notification = Notification::Error("Invalid email address".to_string());
        assert_eq!(notification.to_string(), "[error] Invalid email address");
        assert_eq!(
            serde_json::to_value(&notification).unwrap(),
            serde_json::json!({ "level": "error", "message": "Invalid email address" })
        );
    }

    #[test]
    fn test_mock_notifier() {
        let mut mock = MockNotifier::new();
        mock.expect_notify_success()
            .withf(|message| message == "hello")
            .times(1)
            .return_const(());

        mock.notify_success("hello");
    }
}
