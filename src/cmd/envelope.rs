use clap::error::ErrorKind;
use serde::Serialize;
use serde_json::{Value, json};

pub const EXIT_OK: i32 = 0;
pub const EXIT_INTERNAL: i32 = 1;
pub const EXIT_USAGE: i32 = 3;

/// JSON payload written to stderr when a command fails.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CliError {
    pub error: &'static str,
    pub message: String,
    pub code: i32,
    pub details: Value,
}

impl CliError {
    pub fn usage(message: impl Into<String>, details: Value) -> Self {
        Self {
            error: "input_usage_error",
            message: message.into(),
            code: EXIT_USAGE,
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self {
            error: "internal_error",
            message: message.into(),
            code: EXIT_INTERNAL,
            details,
        }
    }

    /// Serialize to one stderr line and return the exit code to use.
    pub fn emit(&self) -> i32 {
        match serde_json::to_string(self) {
            Ok(serialized) => eprintln!("{serialized}"),
            Err(_) => eprintln!(
                "{{\"error\":\"internal_error\",\"message\":\"failed to serialize error\",\"code\":1}}"
            ),
        }
        self.code
    }
}

/// Exit code for a failed `try_parse`; help and version go to stdout.
pub fn handle_parse_error(command: &str, error: clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            print!("{error}");
            EXIT_OK
        }
        _ => CliError::usage(
            error.to_string(),
            json!({"command": command, "kind": "cli_parse_error"}),
        )
        .emit(),
    }
}
