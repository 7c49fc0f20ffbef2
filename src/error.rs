//! Error types for loading and rewriting notebooks.

use std::path::PathBuf;

/// Result type for table of contents operations.
pub type TocResult<T> = Result<T, TocError>;

/// Errors that abort a run before or during output.
#[derive(Debug, thiserror::Error)]
pub enum TocError {
    /// The notebook could not be read or is not a valid notebook document.
    #[error("Failed to load notebook {path}: {message}")]
    LoadError {
        /// Path of the notebook that failed to load.
        path: PathBuf,
        /// Underlying I/O or JSON error text.
        message: String,
    },

    /// The notebook could not be serialized or written back to disk.
    #[error("Failed to write notebook {path}: {message}")]
    WriteError {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O or JSON error text.
        message: String,
    },
}
