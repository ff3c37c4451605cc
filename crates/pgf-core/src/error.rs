// File: crates/pgf-core/src/error.rs
// Summary: Error type for figure export: one domain error plus wrapped I/O failures.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type FigureResult<T> = std::result::Result<T, FigureError>;

#[derive(Error, Debug)]
pub enum FigureError {
    /// Dataset shape violation: fewer than 2 rows, or ragged row lengths.
    #[error("invalid dataset: {0}")]
    InvalidData(String),

    /// Filesystem failure (directory creation, file write).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Delimited serialization failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
