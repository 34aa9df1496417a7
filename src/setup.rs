// src/setup.rs

use crate::config::{ConsoleConfig, LogFormat};
use std::fmt;
use tracing_subscriber::{fmt as log_fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug)]
pub(crate) enum SetupError {
    InvalidFilter(String),
    Subscriber(String),
}

impl From<tracing_subscriber::filter::ParseError> for SetupError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        SetupError::InvalidFilter(e.to_string())
    }
}

impl From<tracing_subscriber::util::TryInitError> for SetupError {
    fn from(e: tracing_subscriber::util::TryInitError) -> Self {
        SetupError::Subscriber(e.to_string())
    }
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::InvalidFilter(message) => write!(f, "invalid log filter: {}", message),
            SetupError::Subscriber(message) => write!(f, "failed to install logger: {}", message),
        }
    }
}

impl std::error::Error for SetupError {}

pub(super) fn build_filter(config: &ConsoleConfig) -> Result<EnvFilter, SetupError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.log_filter)?),
    }
}

/// Logs go to stderr; stdout belongs to the console form.
pub(super) fn set_up_tracing(config: &ConsoleConfig) -> Result<(), SetupError> {
    let filter = build_filter(config)?;

    let (pretty, json) = match config.log_format {
        LogFormat::Pretty => (Some(log_fmt::layer().with_writer(std::io::stderr)), None),
        LogFormat::Json => (None, Some(log_fmt::layer().json().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .try_init()?;

    tracing::debug!(format = ?config.log_format, "tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_filter_is_reported() {
        if std::env::var("RUST_LOG").is_ok() {
            // RUST_LOG takes precedence over the configured filter
            return;
        }
        let config = ConsoleConfig {
            log_filter: "form=notalevel".to_string(),
            ..ConsoleConfig::default()
        };
        let err = build_filter(&config).unwrap_err();
        assert!(err.to_string().starts_with("invalid log filter"));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(build_filter(&ConsoleConfig::default()).is_ok());
    }
}
