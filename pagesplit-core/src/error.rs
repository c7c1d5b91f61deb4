//! Error types for splitting operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while opening a document or writing its chunks
#[derive(Error, Debug)]
pub enum SplitError {
    /// The input could not be parsed as a document
    #[error("failed to parse {}: {reason}", path.display())]
    Parse {
        /// The input file
        path: PathBuf,
        /// Parser error message
        reason: String,
    },

    /// The input parsed but contains no pages
    #[error("{} has no pages", path.display())]
    EmptyDocument {
        /// The input file
        path: PathBuf,
    },

    /// Writing an output chunk failed
    #[error("failed to write {}", path.display())]
    Io {
        /// The output file being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An output file already exists and overwriting was refused
    #[error("output file already exists: {}", path.display())]
    OutputExists {
        /// The conflicting output file
        path: PathBuf,
    },
}

impl SplitError {
    /// Returns the path the error refers to
    pub fn path(&self) -> &std::path::Path {
        match self {
            SplitError::Parse { path, .. }
            | SplitError::EmptyDocument { path }
            | SplitError::Io { path, .. }
            | SplitError::OutputExists { path } => path,
        }
    }
}

/// Result type for splitting operations
pub type Result<T> = std::result::Result<T, SplitError>;
