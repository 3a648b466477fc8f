//! Error types for the gbhwdb export layer.
//!
//! Errors are layered the same way the export is:
//!
//! - [`SpecError`] - Malformed column specifications (construction time only)
//! - [`ExportError`] - CSV sink failures (open, write, flush)
//! - [`LabelError`] - Chip label fields that matched but are out of range
//! - [`PipelineError`] - Top-level JSON-in / CSV-out orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Column Specification Errors
// =============================================================================

/// Errors detected while assembling a column specification.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    /// A column has an empty output name.
    #[error("Column {index} has an empty name")]
    EmptyName { index: usize },

    /// Two columns share the same output name.
    #[error("Duplicate column name: {0}")]
    DuplicateName(String),
}

// =============================================================================
// CSV Sink Errors
// =============================================================================

/// Errors raised by the CSV sink.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The destination could not be opened for writing.
    #[error("Cannot open '{}' for writing: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A header or data row could not be written.
    #[error("Write failed: {0}")]
    Write(#[from] csv::Error),

    /// Buffered output could not be flushed to the destination.
    #[error("Flush failed: {0}")]
    Flush(#[from] std::io::Error),

    /// The sink already failed; nothing more can be written.
    #[error("CSV sink is in a failed state")]
    SinkFailed,

    /// The sink was already flushed and closed.
    #[error("CSV sink is already finished")]
    SinkFinished,

    /// A data row was written before the header.
    #[error("Header must be written before any row")]
    MissingHeader,

    /// The header was written twice.
    #[error("Header already written")]
    HeaderWritten,

    /// The destination was requested before the sink finished.
    #[error("CSV sink is not finished")]
    NotFinished,
}

// =============================================================================
// Chip Label Errors
// =============================================================================

/// A label matched a known pattern but one of its fields is invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelError {
    /// A numeric date field is outside its range.
    #[error("Invalid {field}: {value}")]
    OutOfRange { field: &'static str, value: String },

    /// A part designation that the pattern admits but we don't know.
    #[error("Unknown part name: {0}")]
    UnknownPart(String),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level export pipeline errors.
///
/// This is the error type returned by [`crate::export::pipeline::export_json_file`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Column specification error.
    #[error("Column specification error: {0}")]
    Spec(#[from] SpecError),

    /// CSV sink error.
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Input file could not be read.
    #[error("Cannot read input: {0}")]
    Io(#[from] std::io::Error),

    /// Input records are not valid JSON submissions.
    #[error("Invalid input records: {0}")]
    Json(#[from] serde_json::Error),

    /// The background export task panicked or was cancelled.
    #[error("Export task failed: {0}")]
    Task(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for specification construction.
pub type SpecResult<T> = Result<T, SpecError>;

/// Result type for CSV sink operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Result type for label field conversion.
pub type LabelResult<T> = Result<T, LabelError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        // SpecError -> PipelineError
        let spec_err = SpecError::DuplicateName("cpu_label".into());
        let pipeline_err: PipelineError = spec_err.into();
        assert!(pipeline_err.to_string().contains("cpu_label"));

        // ExportError -> PipelineError
        let export_err = ExportError::SinkFailed;
        let pipeline_err: PipelineError = export_err.into();
        assert!(pipeline_err.to_string().contains("failed state"));
    }

    #[test]
    fn test_label_error_format() {
        let err = LabelError::OutOfRange {
            field: "week",
            value: "60".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("week"));
        assert!(msg.contains("60"));
    }

    #[test]
    fn test_empty_name_format() {
        let err = SpecError::EmptyName { index: 3 };
        assert_eq!(err.to_string(), "Column 3 has an empty name");
    }
}
