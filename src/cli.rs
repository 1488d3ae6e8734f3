use clap::Parser;
use clap_complete::Shell;
use std::path::PathBuf;

/// rr - recursively remove paths after showing what will go and asking for confirmation
#[derive(Parser, Debug)]
#[command(name = "rr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to remove, in order
    #[arg(value_name = "PATH", required_unless_present = "completions")]
    pub paths: Vec<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}
