use crate::output::traits::{OutputResult, PageSink};
use crate::url::file_name_for;
use std::path::PathBuf;

/// Writes each page body to its own file
///
/// The file name is the final path segment of the link, so
/// `http://x.com/dir/report.html` becomes `report.html` inside the output
/// directory. Existing files of the same name are overwritten.
#[derive(Debug, Clone)]
pub struct SeparateFilesSink {
    dir: PathBuf,
}

impl SeparateFilesSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PageSink for SeparateFilesSink {
    fn write_page(&mut self, url: &str, body: &str) -> OutputResult<PathBuf> {
        let path = self.dir.join(file_name_for(url)?);
        tracing::info!("Saving <{}>", path.display());

        std::fs::write(&path, body)?;
        Ok(path)
    }

    fn describe(&self) -> String {
        format!("separate files in {}", self.dir.display())
    }
}
