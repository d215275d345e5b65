use std::io::Write;

use crate::domain::error::GenerateError;
use crate::domain::report::{FingerprintResult, render};
use crate::engine::fingerprint::{DEFAULT_PROJECT, generate};
use crate::engine::seed::{SeedSource, resolve_seed};

/// Raw positional arguments for the `generate` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateCommandArgs {
    pub project: Option<String>,
    pub seed: Option<String>,
}

/// Parse a seed argument as a signed decimal `i64`.
pub fn parse_seed(value: &str) -> Result<i64, GenerateError> {
    value
        .parse::<i64>()
        .map_err(|source| GenerateError::InvalidSeed {
            value: value.to_string(),
            source,
        })
}

/// Validate arguments, resolve the seed, and build the fingerprint.
///
/// `seeds` is consulted at most once, and only after the explicit seed
/// argument (if any) has been validated.
pub fn execute<S: SeedSource + ?Sized>(
    args: &GenerateCommandArgs,
    seeds: &mut S,
) -> Result<FingerprintResult, GenerateError> {
    let explicit = args.seed.as_deref().map(parse_seed).transpose()?;
    let seed = resolve_seed(explicit, seeds);
    let project = args.project.as_deref().unwrap_or(DEFAULT_PROJECT);
    Ok(generate(project, seed))
}

/// Execute `generate` and write the rendered report to `output`.
pub fn run<S: SeedSource + ?Sized, W: Write>(
    args: &GenerateCommandArgs,
    seeds: &mut S,
    mut output: W,
) -> Result<FingerprintResult, GenerateError> {
    let result = execute(args, seeds)?;
    output
        .write_all(render(&result).as_bytes())
        .and_then(|()| output.flush())
        .map_err(|source| GenerateError::WriteOutput { source })?;
    Ok(result)
}
