use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an `rr` invocation
#[derive(Error, Debug)]
pub enum RrError {
    #[error("no paths given")]
    Usage,

    #[error("cannot inspect '{path}': {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read confirmation: {0}")]
    ConfirmationRead(#[source] io::Error),

    #[error("failed to remove '{path}': {source}")]
    Removal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to terminal: {0}")]
    Output(#[source] io::Error),
}

impl RrError {
    /// Build a traversal error from a walkdir failure.
    ///
    /// The path of the offending entry is preferred; `root` is used when
    /// walkdir does not attach one.
    pub(crate) fn traversal(root: &std::path::Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        RrError::Traversal {
            path,
            source: io::Error::from(err),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = RrError::Removal {
            path: PathBuf::from("/tmp/b"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/b"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn traversal_error_keeps_root_for_missing_path() {
        let tmp = tempfile::TempDir::new().unwrap();
        let missing = tmp.path().join("missing");
        let err = walkdir::WalkDir::new(&missing)
            .into_iter()
            .next()
            .unwrap()
            .unwrap_err();

        match RrError::traversal(&missing, err) {
            RrError::Traversal { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("Expected Traversal, got {other:?}"),
        }
    }

    #[test]
    fn traversal_error_keeps_loop_description() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().join("d");
        std::fs::create_dir(&dir).unwrap();
        std::os::unix::fs::symlink(&dir, dir.join("loop")).unwrap();

        let err = walkdir::WalkDir::new(&dir)
            .follow_links(true)
            .into_iter()
            .find_map(|entry| entry.err())
            .unwrap();
        assert!(err.loop_ancestor().is_some());

        match RrError::traversal(&dir, err) {
            RrError::Traversal { source, .. } => {
                let msg = source.to_string();
                assert!(msg.contains(&dir.display().to_string()), "{msg}");
            }
            other => panic!("Expected Traversal, got {other:?}"),
        }
    }

    #[test]
    fn usage_error_mentions_paths() {
        assert!(RrError::Usage.to_string().contains("paths"));
    }
}
