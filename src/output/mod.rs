//! Output module for writing exported pages
//!
//! This module handles:
//! - The write-permission check made before anything is fetched
//! - The three page sinks: combined file, separate files, separate PDFs
//! - The external HTML-to-PDF renderer

mod combined;
mod pdf;
mod separate;
mod traits;

pub use combined::CombinedFileSink;
pub use pdf::{SeparatePdfSink, WkhtmltopdfRenderer};
pub use separate::SeparateFilesSink;
pub use traits::{OutputError, OutputResult, PageSink, PdfRenderer};

use crate::config::{OutputMode, RunConfig};
use crate::DownloadError;
use std::io::ErrorKind;
use std::path::Path;

/// Name of the scratch file created by [`check_write_permission`]
const SCRATCH_FILE: &str = ".download-all.tst";

/// Checks that files can be created in `dir`
///
/// A small scratch file is written and removed again. Permission problems are
/// reported as [`DownloadError::PermissionDenied`] so the run can stop
/// before any network traffic.
pub fn check_write_permission(dir: &Path) -> Result<(), DownloadError> {
    let scratch = dir.join(SCRATCH_FILE);

    match std::fs::write(&scratch, b"test") {
        Ok(()) => {
            std::fs::remove_file(&scratch)?;
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(DownloadError::PermissionDenied {
            path: dir.display().to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Builds the sink selected by the run configuration
///
/// A relative combined-file path is placed inside the output directory.
pub fn build_sink(config: &RunConfig) -> Box<dyn PageSink> {
    let sink: Box<dyn PageSink> = match &config.mode {
        OutputMode::Combined(path) => Box::new(CombinedFileSink::new(config.output_dir.join(path))),
        OutputMode::SeparateFiles => Box::new(SeparateFilesSink::new(&config.output_dir)),
        OutputMode::SeparatePdfs => Box::new(SeparatePdfSink::new(
            &config.output_dir,
            WkhtmltopdfRenderer::new(config.pdf.wkhtmltopdf_path.clone()),
        )),
    };

    tracing::debug!("Writing to {}", sink.describe());
    sink
}
