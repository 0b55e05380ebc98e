//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog engine operations
//! and the [`Result`] convenience type.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all catalog engine operations.
///
/// Every failure is returned as a value; the engine never aborts the process.
/// Malformed input lines surface as [`CatalogError::ParseSkip`] only from the
/// line codec itself or from a reader running in strict recovery mode.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No book with the given ISBN is in the catalog.
    #[error("Book with ISBN {0} not found")]
    NotFound(u64),

    /// A book with the given ISBN is already in the catalog.
    #[error("Book with ISBN {0} already exists")]
    AlreadyExists(u64),

    /// The book is already borrowed.
    #[error("Book with ISBN {0} is currently unavailable")]
    AlreadyBorrowed(u64),

    /// A line could not be parsed into a book and was skipped.
    #[error("Skipped line: {0}")]
    ParseSkip(String),

    /// The catalog file to load does not exist.
    #[error("Catalog file '{}' not found", .0.display())]
    LoadFileMissing(PathBuf),

    /// The catalog could not be written to its destination.
    #[error("Error saving catalog to '{}': {source}", path.display())]
    SaveFailed {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A page selection was outside the visible window.
    #[error("Invalid book number {index}: expected a number between 1 and {max}")]
    InvalidSelection {
        /// The 1-based index that was requested
        index: usize,
        /// Number of books in the visible window
        max: usize,
    },

    /// A page navigation command could not be understood.
    #[error("Invalid page command: '{0}'")]
    InvalidCommand(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
