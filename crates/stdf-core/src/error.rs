//! Record-model error type.
//!
//! The lookup variants signal a mismatch between a record and its schema, i.e.
//! a bug in whoever built the record, not a data condition that a renderer
//! should try to recover from.

use thiserror::Error;

use crate::RecordType;

/// The error type for `stdf-core` lookups.
#[derive(Debug, Error)]
pub enum StdfError {
    #[error("{record} has no field named {field}")]
    MissingField {
        record: RecordType,
        field:  &'static str,
    },

    #[error("{record} field index {index} out of range ({len} values)")]
    FieldIndex {
        record: RecordType,
        index:  usize,
        len:    usize,
    },

    #[error("{record} field {field} is not an integer in range")]
    NotAnInteger {
        record: RecordType,
        field:  &'static str,
    },

    #[error("unknown record type {0:?}")]
    UnknownRecordType(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for record lookups.
pub type StdfResult<T> = Result<T, StdfError>;
