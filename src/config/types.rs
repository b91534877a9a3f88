use serde::Deserialize;
use std::path::PathBuf;

/// Default name of the combined output file
pub const DEFAULT_OUTFILE: &str = "download.html";

/// Settings loaded from the optional TOML file
///
/// Every section is optional; missing sections and keys fall back to the
/// defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub pdf: PdfConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// HTML-to-PDF renderer configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    /// Path or name of the wkhtmltopdf executable
    #[serde(rename = "wkhtmltopdf-path", default = "default_wkhtmltopdf_path")]
    pub wkhtmltopdf_path: String,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            wkhtmltopdf_path: default_wkhtmltopdf_path(),
        }
    }
}

fn default_user_agent() -> String {
    format!("download-all/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_wkhtmltopdf_path() -> String {
    "wkhtmltopdf".to_string()
}

/// Where the exported pages go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Every body appended, in link order, to this one file
    Combined(PathBuf),
    /// One `.html` file per link, named after the link's last path segment
    SeparateFiles,
    /// One `.pdf` file per link, named after the link's last path segment
    SeparatePdfs,
}

impl OutputMode {
    /// Builds the mode from the two mutually exclusive command-line flags
    ///
    /// Callers are expected to reject `separate && pdf` before calling this;
    /// the command line does so with a clap conflict.
    pub fn from_flags(separate: bool, pdf: bool, outfile: PathBuf) -> Self {
        match (separate, pdf) {
            (_, true) => Self::SeparatePdfs,
            (true, false) => Self::SeparateFiles,
            (false, false) => Self::Combined(outfile),
        }
    }
}

impl Default for OutputMode {
    fn default() -> Self {
        Self::Combined(PathBuf::from(DEFAULT_OUTFILE))
    }
}

/// Complete, validated configuration for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Parent page URL, scheme ensured
    pub parent_url: String,
    /// Prefix for relative hrefs, always ending in `/`
    pub site_path: String,
    /// Active output sink
    pub mode: OutputMode,
    /// Directory that separate files and PDFs are written to
    pub output_dir: PathBuf,
    pub http: HttpConfig,
    pub pdf: PdfConfig,
}
