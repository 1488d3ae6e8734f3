use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Result, RrError};

use super::summary::FilesSummary;

/// Walk every input path and aggregate a single summary.
///
/// Each top-level path is visited together with all of its descendants.
/// The first entry that cannot be listed or stat'ed aborts the whole walk;
/// counts collected up to that point are dropped with the accumulator and
/// never reach the caller.
pub fn summarize_paths<P: AsRef<Path>>(paths: &[P]) -> Result<FilesSummary> {
    if paths.is_empty() {
        return Err(RrError::Usage);
    }

    let mut summary = FilesSummary::default();
    for path in paths {
        summarize_into(path.as_ref(), &mut summary)?;
    }

    Ok(summary)
}

fn summarize_into(root: &Path, summary: &mut FilesSummary) -> Result<()> {
    tracing::debug!(path = %root.display(), "Walking");

    // Symlinks are counted as files, never followed (the root included).
    let walker = WalkDir::new(root)
        .follow_links(false)
        .follow_root_links(false);

    for result in walker {
        let entry = result.map_err(|err| RrError::traversal(root, err))?;
        let metadata = entry
            .metadata()
            .map_err(|err| RrError::traversal(root, err))?;

        if metadata.is_dir() {
            summary.record_dir();
        } else {
            summary.record_file(metadata.len());
        }
    }

    Ok(())
}
