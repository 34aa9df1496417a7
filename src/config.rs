// src/config.rs

const DEFAULT_LOG_FILTER: &str = "login_form=info,form=info,services=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConsoleConfig {
    pub log_format: LogFormat,
    /// Used when `RUST_LOG` is not set
    pub log_filter: String,
    /// Print the form view as JSON after every submit
    pub echo_state: bool,
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_format = match lookup("LOGIN_LOG_FORMAT").as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        let log_filter = lookup("LOGIN_LOG_FILTER")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let echo_state = lookup("LOGIN_ECHO_STATE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        ConsoleConfig {
            log_format,
            log_filter,
            echo_state,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
