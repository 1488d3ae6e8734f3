pub mod completions;
pub mod remove;
