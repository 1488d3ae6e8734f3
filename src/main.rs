use clap::Parser;
use std::process::ExitCode;

use rr::cli::Cli;
use rr::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.completions {
        Some(shell) => commands::completions::run(shell, &mut std::io::stdout()),
        None => {
            // Initialize logging based on verbosity
            init_logging(cli.verbose, cli.quiet);

            tracing::debug!(paths = ?cli.paths, "Starting");
            commands::remove::run(&cli).map(|_| ())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rr={}", level)));

    // stdout carries only the summary and the prompt
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
