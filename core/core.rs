pub mod file_finder;
pub mod processor;
pub mod stripper;

use std::path::PathBuf;

pub use file_finder::{
    CliArgs, Command, CompletionArgs, DEFAULT_EXTENSION, DecommentArgs, find_files,
};

pub use processor::{ProcessSummary, process_directory, process_files, process_single_file};
pub use stripper::{Strategy, strip, strip_with};

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid pattern {pattern}: {source}")]
    Pattern {
        pattern: String,
        source: ignore::Error,
    },

    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),
}
