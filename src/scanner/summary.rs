use std::fmt;

use super::size::format_size;

/// Aggregate counts collected while walking the input paths.
///
/// Directories contribute to `dirs` only. Everything else (regular files,
/// symlinks, special files) counts as a file and adds its length to
/// `file_size_sum`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilesSummary {
    /// Directory entries visited, top-level directories included
    pub dirs: u64,
    /// Non-directory entries visited
    pub files: u64,
    /// Sum of non-directory entry sizes in bytes
    pub file_size_sum: u64,
}

impl FilesSummary {
    pub fn record_dir(&mut self) {
        self.dirs += 1;
    }

    pub fn record_file(&mut self, len: u64) {
        self.files += 1;
        self.file_size_sum += len;
    }

    /// Total number of entries visited
    pub fn entries(&self) -> u64 {
        self.dirs + self.files
    }
}

impl fmt::Display for FilesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} directories, {} files ({})",
            self.dirs,
            self.files,
            format_size(self.file_size_sum)
        )
    }
}
