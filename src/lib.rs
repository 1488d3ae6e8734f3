//! rr - a confirmation-gated recursive remover
//!
//! This crate provides:
//! - Aggregation of directory/file counts and sizes under a set of paths
//! - A yes/no confirmation gate that defaults to "no"
//! - Ordered, first-failure-stops recursive removal

pub mod cli;
pub mod commands;
pub mod error;
pub mod orchestrator;
pub mod prompt;
pub mod remover;
pub mod scanner;

// Re-export commonly used types
pub use error::{Result, RrError};
pub use orchestrator::{Outcome, State};
pub use scanner::FilesSummary;
