use models::Field;
use serde::Serialize;
use services::validation::FieldViolation;
use std::collections::BTreeMap;

/// Inline error shown next to each field, at most one per field.
///
/// A field without an entry has no visible error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorState {
    messages: BTreeMap<Field, String>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh state from a violation sequence.
    ///
    /// When a field has several violations the last one wins. Only that
    /// message is kept for inline display.
    pub fn from_violations(violations: &[FieldViolation]) -> Self {
        let mut messages = BTreeMap::new();
        for violation in violations {
            messages.insert(violation.field, violation.message.clone());
        }
        Self { messages }
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.messages.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
