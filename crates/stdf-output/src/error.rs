//! Error types for stdf-output.

use stdf_core::{HeadSite, StdfError};
use thiserror::Error;

/// Errors that can occur while rendering a record stream.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The record does not match its schema.
    #[error("record error: {0}")]
    Record(#[from] StdfError),

    /// A test result arrived for a head/site with no preceding part record.
    #[error("no part started on head/site {0}")]
    UnresolvedPart(HeadSite),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
