use crate::output::traits::{OutputError, OutputResult, PageSink, PdfRenderer};
use crate::url::pdf_name_for;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Renders markup with an external `wkhtmltopdf` binary
///
/// The markup is piped on stdin (`-` as the input argument) and the tool
/// runs with `--quiet`, so nothing is printed unless it fails.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfRenderer {
    program: String,
}

impl WkhtmltopdfRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl PdfRenderer for WkhtmltopdfRenderer {
    fn render(&self, markup: &str, output: &Path) -> OutputResult<()> {
        let mut child = Command::new(&self.program)
            .arg("--quiet")
            .arg("-")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| OutputError::Render(format!("could not start {}: {}", self.program, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| OutputError::Render(format!("no stdin for {}", self.program)))?;

        // stdin is written on its own thread while stderr drains here
        let (written, result) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || stdin.write_all(markup.as_bytes()));
            let result = child.wait_with_output();
            (writer.join(), result)
        });

        let result = result?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(OutputError::Render(format!(
                "{} exited with {}: {}",
                self.program,
                result.status,
                stderr.trim()
            )));
        }

        written.map_err(|_| OutputError::Render("stdin writer panicked".to_string()))??;
        Ok(())
    }
}

/// Renders each page body to its own PDF
///
/// `http://x.com/dir/report.html` becomes `report.pdf` inside the output
/// directory. No `.html` file is written.
pub struct SeparatePdfSink<R: PdfRenderer> {
    dir: PathBuf,
    renderer: R,
}

impl<R: PdfRenderer> SeparatePdfSink<R> {
    pub fn new(dir: impl Into<PathBuf>, renderer: R) -> Self {
        Self {
            dir: dir.into(),
            renderer,
        }
    }
}

impl<R: PdfRenderer> PageSink for SeparatePdfSink<R> {
    fn write_page(&mut self, url: &str, body: &str) -> OutputResult<PathBuf> {
        let path = self.dir.join(pdf_name_for(url)?);
        tracing::info!("Saving <{}>", path.display());

        self.renderer.render(body, &path)?;
        Ok(path)
    }

    fn describe(&self) -> String {
        format!("separate PDFs in {}", self.dir.display())
    }
}
