mod size;
mod summary;
mod walker;

pub use size::format_size;
pub use summary::FilesSummary;
pub use walker::summarize_paths;
