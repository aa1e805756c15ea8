use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the failure cases that can occur while reading the
/// report workbooks or emitting the presence table.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as writing to stdout.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization of the matrix fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when a report path does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when a report exists but cannot be opened as a workbook.
    #[error("Error reading {}: {source}", .path.display())]
    WorkbookRead {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
