//! Remove command implementation.

use crate::cli::Cli;
use crate::orchestrator::{self, Outcome};
use anyhow::Result;
use std::io;

/// Run an invocation against the process's stdin and stdout.
pub fn run(cli: &Cli) -> Result<Outcome> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let outcome = orchestrator::run(&cli.paths, &mut input, &mut output)?;

    if let Outcome::Removed(_) = outcome {
        tracing::info!(
            paths = cli.paths.len(),
            entries = outcome.summary().entries(),
            "Removal complete"
        );
    }

    Ok(outcome)
}
