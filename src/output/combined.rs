use crate::output::traits::{OutputResult, PageSink};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Appends every page body to one file
///
/// The file is opened in append mode for each page, so it keeps growing
/// across links and across runs. Running the same download twice leaves
/// every body in the file twice.
#[derive(Debug, Clone)]
pub struct CombinedFileSink {
    path: PathBuf,
}

impl CombinedFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSink for CombinedFileSink {
    fn write_page(&mut self, _url: &str, body: &str) -> OutputResult<PathBuf> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(body.as_bytes())?;
        file.flush()?;

        Ok(self.path.clone())
    }

    fn describe(&self) -> String {
        format!("combined file {}", self.path.display())
    }
}
