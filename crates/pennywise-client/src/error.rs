use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `pennywise {cmd} --help` for usage."),
            None => "Run `pennywise --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    /// A persisted row whose amount (or shape) could not be read back.
    pub fn ledger_parse_failed(path: &Path, row: u64, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_parse_failed",
            &format!("Ledger file `{location}` has an unreadable row {row}: {detail}"),
            vec![
                format!("Open `{location}` and fix or remove row {row}."),
                "Amounts must be plain decimal numbers such as `12.50`.".to_string(),
            ],
        )
        .with_data(json!({
            "path": location,
            "row": row,
        }))
    }

    pub fn ledger_header_invalid(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_parse_failed",
            &format!("Ledger file `{location}` has an unreadable header: {detail}"),
            vec![format!(
                "Make the first line of `{location}` read `date,category,amount,description`."
            )],
        )
        .with_data(json!({
            "path": location,
            "row": 0,
        }))
    }

    pub fn ledger_io_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_io_failed",
            &format!("Cannot access ledger file `{location}`: {detail}"),
            vec![format!(
                "Check that `{location}` is readable and writable, or pass `--ledger <path>`."
            )],
        )
        .with_data(json!({
            "path": location,
        }))
    }

    pub fn config_invalid(detail: &str) -> Self {
        Self::new(
            "config_invalid",
            &format!("Configuration could not be loaded: {detail}"),
            vec![
                "Check `config.toml` in your pennywise home directory.".to_string(),
                "Check `PENNYWISE_*` environment variables.".to_string(),
            ],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn is_internal(&self) -> bool {
        self.code.starts_with("internal_")
    }
}

impl From<ValidationError> for ClientError {
    fn from(error: ValidationError) -> Self {
        let (code, hint) = match &error {
            ValidationError::Amount { .. } => (
                "invalid_amount",
                "Pass a positive number, e.g. `--amount 12.50`.",
            ),
            ValidationError::Category { .. } => (
                "invalid_category",
                "Run `pennywise categories` to list valid choices.",
            ),
            ValidationError::Date { .. } => (
                "invalid_date",
                "Use a real calendar date in YYYY-MM-DD form, or omit `--date` for today.",
            ),
        };
        Self::new(code, &error.to_string(), vec![hint.to_string()])
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
