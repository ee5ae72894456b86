//! Error types for the export pipeline.

use thiserror::Error;

/// Errors that can occur while normalizing records or generating the
/// calendar document.
///
/// `DateRange` and `TimeRange` are per-record: the caller skips that record
/// and continues with the rest. `NoEvents` means the whole run produced
/// nothing to export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unrecognized date range {0:?}")]
    DateRange(String),

    #[error("unrecognized time range {0:?}")]
    TimeRange(String),

    #[error("no events to export")]
    NoEvents,
}

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;
