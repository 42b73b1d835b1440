//! Error types for the concilia-core library.

use thiserror::Error;

/// Main error type for the concilia library.
#[derive(Error, Debug)]
pub enum ConciliaError {
    /// Spreadsheet ingest/export error.
    #[error("spreadsheet error: {0}")]
    Sheet(#[from] SheetError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading or writing workbooks.
#[derive(Error, Debug)]
pub enum SheetError {
    /// Failed to open/parse the workbook.
    #[error("failed to open workbook: {0}")]
    Open(#[from] calamine::XlsxError),

    /// The workbook contains no worksheets.
    #[error("workbook has no worksheets")]
    NoWorksheet,

    /// No header row remained after skipping the banner rows.
    #[error("header row not found after skipping {skipped} rows")]
    HeaderRowMissing { skipped: usize },

    /// A required column is absent from the header row.
    #[error("missing expected column: {0}")]
    MissingColumn(String),

    /// Failed to write the result workbook.
    #[error("failed to write workbook: {0}")]
    Write(#[from] rust_xlsxwriter::XlsxError),
}

/// Result type for the concilia library.
pub type Result<T> = std::result::Result<T, ConciliaError>;
