//! Error types for report generation.

use thiserror::Error;

/// Errors raised while rendering or writing a report.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("PDF generation error: {0}")]
    PdfGeneration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
