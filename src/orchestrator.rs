//! Sequencing of one invocation: aggregate, report, confirm, remove.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::error::{Result, RrError};
use crate::prompt;
use crate::remover;
use crate::scanner::{self, FilesSummary};

/// Lifecycle of a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    Aggregating,
    Summarized,
    Declined,
    Confirmed,
    Removing,
    Done,
    Failed,
}

impl State {
    /// Whether `next` may follow `self`.
    ///
    /// `Failed` is reachable from aggregation, the confirmation step and
    /// removal only. `Done` and `Failed` are terminal.
    pub fn can_transition_to(self, next: State) -> bool {
        use State::*;
        matches!(
            (self, next),
            (Idle, Aggregating)
                | (Aggregating, Summarized)
                | (Aggregating, Failed)
                | (Summarized, Declined)
                | (Summarized, Confirmed)
                | (Summarized, Failed)
                | (Declined, Done)
                | (Confirmed, Removing)
                | (Removing, Done)
                | (Removing, Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, State::Done | State::Failed)
    }
}

/// Successful end of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The operator confirmed and every path was removed.
    Removed(FilesSummary),
    /// The operator declined; nothing was touched.
    Declined(FilesSummary),
}

impl Outcome {
    pub fn summary(&self) -> FilesSummary {
        match self {
            Outcome::Removed(summary) | Outcome::Declined(summary) => *summary,
        }
    }
}

struct Machine {
    state: State,
}

impl Machine {
    fn advance(&mut self, next: State) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::debug!(from = ?self.state, to = ?next, "State transition");
        self.state = next;
    }
}

/// Run one invocation over `paths`.
///
/// The summary line and the prompt are written to `output`; the answer is
/// read from `input`. Nothing is written and nothing is read when the
/// aggregation fails.
pub fn run<P, R, W>(paths: &[P], input: &mut R, output: &mut W) -> Result<Outcome>
where
    P: AsRef<Path>,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut machine = Machine { state: State::Idle };

    let result = drive(&mut machine, paths, input, output);
    match &result {
        Ok(_) => machine.advance(State::Done),
        Err(err) => {
            tracing::debug!(error = %err, state = ?machine.state, "Invocation failed");
            machine.advance(State::Failed);
        }
    }
    debug_assert!(machine.state.is_terminal());

    result
}

fn drive<P, R, W>(
    machine: &mut Machine,
    paths: &[P],
    input: &mut R,
    output: &mut W,
) -> Result<Outcome>
where
    P: AsRef<Path>,
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    machine.advance(State::Aggregating);
    let summary = scanner::summarize_paths(paths)?;
    machine.advance(State::Summarized);

    tracing::info!(
        dirs = summary.dirs,
        files = summary.files,
        bytes = summary.file_size_sum,
        "Aggregated"
    );
    writeln!(output, "{}", summary).map_err(RrError::Output)?;

    let message = prompt::removal_message(paths);
    if !prompt::confirm(input, output, &message)? {
        machine.advance(State::Declined);
        tracing::info!("Removal declined");
        return Ok(Outcome::Declined(summary));
    }

    machine.advance(State::Confirmed);
    machine.advance(State::Removing);
    remover::remove_all(paths)?;

    Ok(Outcome::Removed(summary))
}
