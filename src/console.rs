// src/console.rs
//
// Line-oriented stand-in for the login screen: each stdin line is one user
// event, notifications and inline errors are printed back.

use crate::config::ConsoleConfig;
use form::{FormController, SubmitOutcome};
use models::{Credentials, Field, UnknownFieldError};
use services::authentication::{AuthenticationError, Authenticator};
use services::notification::NotificationLog;
use std::fmt;
use std::io::{self, BufRead, Write};

const HELP: &str = "commands: email <value> | password <value> | submit | show | reset | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Set(Field, String),
    Submit,
    Show,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum CommandError {
    UnknownCommand(String),
    UnknownField(UnknownFieldError),
}

impl From<UnknownFieldError> for CommandError {
    fn from(e: UnknownFieldError) -> Self {
        CommandError::UnknownField(e)
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::UnknownCommand(name) => write!(f, "unknown command: {} ({})", name, HELP),
            CommandError::UnknownField(e) => write!(f, "{}", e),
        }
    }
}

impl Command {
    /// Field values are everything after the first space, kept verbatim so
    /// that padded input reaches the validator unchanged.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (name, rest) = match line.split_once(' ') {
            Some((name, rest)) => (name, rest),
            None => (line, ""),
        };

        match name {
            "submit" => Ok(Command::Submit),
            "show" => Ok(Command::Show),
            "reset" => Ok(Command::Reset),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "email" | "password" => Ok(Command::Set(name.parse::<Field>()?, rest.to_string())),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Stands in for the real sign-in call: logs the handoff and accepts it
#[derive(Debug, Default)]
pub(crate) struct LoggingAuthenticator;

impl Authenticator for LoggingAuthenticator {
    fn authenticate(&mut self, credentials: &Credentials) -> Result<(), AuthenticationError> {
        tracing::debug!(email = %credentials.email, "handing credentials to authentication service");
        Ok(())
    }
}

type ConsoleForm = FormController<NotificationLog, LoggingAuthenticator>;

fn flush_notifications<W: Write>(form: &mut ConsoleForm, output: &mut W) -> io::Result<()> {
    for notification in form.notifier_mut().drain() {
        writeln!(output, "{}", notification)?;
    }
    Ok(())
}

fn render_inline_errors<W: Write>(form: &ConsoleForm, output: &mut W) -> io::Result<()> {
    for field in Field::ALL {
        if let Some(message) = form.error_for(field) {
            writeln!(output, "  {}: {}", field, message)?;
        }
    }
    Ok(())
}

fn render_fields<W: Write>(form: &ConsoleForm, output: &mut W) -> io::Result<()> {
    for field in Field::ALL {
        let value = match field {
            Field::Email => form.credentials().email.clone(),
            Field::Password => "*".repeat(form.credentials().password.chars().count()),
        };
        let marker = if form.has_error(field) { " (!)" } else { "" };
        writeln!(output, "{} = {}{}", field, value, marker)?;
    }
    render_inline_errors(form, output)
}

/// Drives one form mount from `input` until EOF or `quit`.
pub(crate) fn run<R: BufRead, W: Write>(input: R, mut output: W, config: &ConsoleConfig) -> io::Result<()> {
    let mut form = FormController::new(NotificationLog::new(), LoggingAuthenticator);
    writeln!(output, "{}", HELP)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Set(field, value) => form.on_field_change(field, value),
            Command::Submit => {
                let outcome = form.on_submit();
                flush_notifications(&mut form, &mut output)?;
                render_inline_errors(&form, &mut output)?;
                if let SubmitOutcome::Accepted(Err(e)) = outcome {
                    writeln!(output, "sign-in failed: {}", e)?;
                }
                if config.echo_state {
                    writeln!(output, "{}", serde_json::to_string(&form.view())?)?;
                }
            }
            Command::Show => render_fields(&form, &mut output)?,
            Command::Reset => form.reset(),
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => break,
        }
    }

    output.flush()
}
