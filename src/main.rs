use std::io;
use std::process;

use clap::Parser;
use seedprint::cmd::envelope::{CliError, EXIT_OK, handle_parse_error};
use seedprint::cmd::generate::{self, GenerateCommandArgs};
use seedprint::domain::error::GenerateError;
use seedprint::engine::seed::RandomSeedSource;
use seedprint::util::hash::DIGEST_ALGORITHM;
use serde_json::json;

#[derive(Debug, Parser)]
#[command(
    name = "seedprint",
    version,
    about = "Deterministic project fingerprint generator"
)]
struct Cli {
    /// Project identifier; empty or missing means `sample`.
    #[arg(allow_negative_numbers = true)]
    project: Option<String>,

    /// Integer seed; drawn at random from 0..=32767 when missing.
    #[arg(allow_negative_numbers = true)]
    seed: Option<String>,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => return handle_parse_error("generate", error),
    };

    let args = GenerateCommandArgs {
        project: cli.project,
        seed: cli.seed,
    };
    let stdout = io::stdout();
    match generate::run(&args, &mut RandomSeedSource, stdout.lock()) {
        Ok(_) => EXIT_OK,
        Err(error) => to_cli_error(&error).emit(),
    }
}

fn to_cli_error(error: &GenerateError) -> CliError {
    match error {
        GenerateError::InvalidSeed { value, .. } => CliError::usage(
            error.to_string(),
            json!({"command": "generate", "argument": "seed", "value": value}),
        ),
        GenerateError::WriteOutput { .. } => CliError::internal(
            error.to_string(),
            json!({"command": "generate", "algorithm": DIGEST_ALGORITHM}),
        ),
    }
}
