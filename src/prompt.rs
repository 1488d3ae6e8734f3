//! Confirmation gate: one question, one line of input, one decision.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::error::{Result, RrError};

/// Build the question asked before removing `paths`.
pub fn removal_message<P: AsRef<Path>>(paths: &[P]) -> String {
    let names: Vec<String> = paths
        .iter()
        .map(|p| p.as_ref().display().to_string())
        .collect();
    format!("remove {}?", names.join(", "))
}

/// Resolve a single answer token.
///
/// Only `y` and `yes` (any case, surrounding whitespace ignored) are
/// affirmative. Anything else, the empty string included, is a no.
pub fn is_affirmative(token: &str) -> bool {
    matches!(token.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Ask `message` on `output` and read exactly one line from `input`.
///
/// Returns the resolved decision. A closed or unreadable input stream is
/// a [`RrError::ConfirmationRead`]; a blank line is a plain "no".
pub fn confirm<R, W>(input: &mut R, output: &mut W, message: &str) -> Result<bool>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(output, "{} (y/N): ", message).map_err(RrError::Output)?;
    output.flush().map_err(RrError::Output)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(RrError::ConfirmationRead)?;
    if read == 0 {
        return Err(RrError::ConfirmationRead(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before an answer was given",
        )));
    }

    let token = line.split_whitespace().next().unwrap_or("");
    let decision = is_affirmative(token);
    tracing::debug!(token, decision, "Read confirmation");

    Ok(decision)
}
