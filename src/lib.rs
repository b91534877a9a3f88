//! Download-All: a one-level page consolidator
//!
//! This crate fetches a parent HTML page, collects every link on it whose
//! href ends in `html`, downloads each linked page in document order and
//! writes the `<body>` of each one to a combined file, separate files, or
//! separate PDFs.

pub mod config;
pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Fatal errors that end a run before or instead of exporting
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not retrieve parent page {url}: {source}")]
    ParentFetch {
        url: String,
        source: crawler::FetchError,
    },

    #[error("You do not have permission to create files in {path}")]
    PermissionDenied { path: String },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),

    #[error("URL has no file name: {0}")]
    NoFileName(String),
}

/// Result type alias for Download-All operations
pub type Result<T> = std::result::Result<T, DownloadError>;

// Re-export commonly used types
pub use config::{OutputMode, RunConfig};
pub use crawler::{collect_links, fetch_parent_links, ExportReport, Exporter};
pub use crate::url::{is_qualifying_href, resolve_href};

/// Runs a complete download: permission preflight, one parent fetch, then
/// the per-link export.
///
/// Only fatal conditions are returned as errors. Per-link failures are
/// collected in the returned report.
pub async fn run(config: RunConfig) -> Result<ExportReport> {
    output::check_write_permission(&config.output_dir)?;

    let client = crawler::build_http_client(&config.http)?;

    let links = fetch_parent_links(&client, &config.parent_url, &config.site_path).await?;
    tracing::info!(
        "Found {} linked pages on {}",
        links.len(),
        config.parent_url
    );

    let sink = output::build_sink(&config);
    let mut exporter = Exporter::new(client, sink);

    Ok(exporter.export(&links).await)
}
