use std::io;
use std::process;

use clap::Parser;
use seedprint::cmd::checksum;
use seedprint::cmd::envelope::{CliError, EXIT_OK, handle_parse_error};
use seedprint::domain::error::ChecksumError;
use seedprint::util::hash::DIGEST_ALGORITHM;
use serde_json::json;

#[derive(Debug, Parser)]
#[command(
    name = "seedprint-checksum",
    version,
    about = "Print a short checksum of the concatenated arguments"
)]
struct Cli {
    /// Parts hashed back to back; `codex demo` when none are given.
    parts: Vec<String>,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error("checksum", error),
    };

    let stdout = io::stdout();
    match checksum::run(&cli.parts, stdout.lock()) {
        Ok(_) => EXIT_OK,
        Err(error) => to_cli_error(&error).emit(),
    }
}

fn to_cli_error(error: &ChecksumError) -> CliError {
    match error {
        ChecksumError::WriteOutput { .. } => CliError::internal(
            error.to_string(),
            json!({"command": "checksum", "algorithm": DIGEST_ALGORITHM}),
        ),
    }
}
