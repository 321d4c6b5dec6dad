use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for archive operations
pub type Result<T> = std::result::Result<T, MpkError>;

/// Unified error type for all archive operations
#[derive(Debug, Error)]
pub enum MpkError {
    // Build errors
    #[error("Failed to create archive {path}: {source}")]
    CreateArchive { path: PathBuf, source: io::Error },

    #[error("Failed to open source file {path}: {source}")]
    SourceOpen { path: PathBuf, source: io::Error },

    #[error("File corrupted: {name}")]
    CorruptSource { name: String },

    #[error("Directory table is full: {declared} entries declared")]
    DirectoryFull { declared: u32 },

    #[error("Too many input files for one archive: {0}")]
    TooManyEntries(usize),

    // Host errors
    #[error("Host environment failure: {0}")]
    Host(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
