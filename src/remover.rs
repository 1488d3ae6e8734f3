//! Recursive removal of the top-level paths.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use crate::error::{Result, RrError};

/// Remove every path in order, stopping at the first failure.
///
/// Paths removed before the failing one stay removed; later paths are
/// not attempted. The returned error names the failing path.
pub fn remove_all<P: AsRef<Path>>(paths: &[P]) -> Result<()> {
    for path in paths {
        let path = path.as_ref();
        remove_path(path).map_err(|source| {
            tracing::debug!(path = %path.display(), error = %source, "Removal failed");
            RrError::Removal {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::info!(path = %path.display(), "Removed");
    }

    Ok(())
}

/// Remove a single path and everything beneath it.
///
/// Symlinks are unlinked, never followed, even when named with a trailing
/// slash. A path whose last component is `.` or `..` is rejected before
/// anything is touched. A path that is already gone is not an error.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let path = trim_trailing_separators(path);
    if ends_with_dot(path) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "refusing to remove a path ending in '.' or '..'",
        ));
    }

    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// `link/` resolves through the link; `link` names the link itself.
fn trim_trailing_separators(path: &Path) -> &Path {
    let mut bytes = path.as_os_str().as_bytes();
    while bytes.len() > 1 && bytes.ends_with(b"/") {
        bytes = &bytes[..bytes.len() - 1];
    }
    Path::new(OsStr::from_bytes(bytes))
}

// `Path::components` drops a trailing `.`, so look at the raw bytes.
fn ends_with_dot(path: &Path) -> bool {
    let bytes = path.as_os_str().as_bytes();
    let last = match bytes.iter().rposition(|&b| b == b'/') {
        Some(idx) => &bytes[idx + 1..],
        None => bytes,
    };
    last == b"." || last == b".."
}
