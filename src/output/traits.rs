//! Output sink traits and error types
//!
//! This module defines the trait interface shared by the three output
//! sinks and the renderer used for PDF output.

use crate::UrlError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing one page
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot name output file: {0}")]
    FileName(#[from] UrlError),

    #[error("PDF rendering failed: {0}")]
    Render(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for extracted page bodies
///
/// The exporter calls `write_page` once per successfully extracted link, in
/// link order. Each call either fully succeeds or returns an error for that
/// link alone; a sink never aborts the batch.
pub trait PageSink {
    /// Writes one page body
    ///
    /// # Arguments
    ///
    /// * `url` - The absolute URL the body came from
    /// * `body` - The serialized `<body>` element
    ///
    /// # Returns
    ///
    /// The path that was written or appended to
    fn write_page(&mut self, url: &str, body: &str) -> OutputResult<PathBuf>;

    /// Short name of the sink, used in log lines
    fn describe(&self) -> String;
}

/// Renders HTML markup to a PDF file
pub trait PdfRenderer {
    /// Renders `markup` to `output`, replacing any existing file
    fn render(&self, markup: &str, output: &Path) -> OutputResult<()>;
}
