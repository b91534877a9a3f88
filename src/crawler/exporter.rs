//! Page exporter - the per-link fetch, extract and write loop
//!
//! Links are processed strictly one after another in the order given. A
//! failure on one link is recorded and logged, then the loop moves on; the
//! exporter itself never fails.

use crate::crawler::charset::{decode_page, DecodeError};
use crate::crawler::fetcher::{fetch_page, FetchError};
use crate::crawler::parser::extract_body;
use crate::output::{OutputError, PageSink};
use reqwest::Client;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single link contributed nothing to the output
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("URL error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Unicode codec error, characters would be corrupted: {0}")]
    Encoding(#[from] DecodeError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

/// A link that was skipped and the reason
#[derive(Debug)]
pub struct LinkFailure {
    pub url: String,
    pub error: LinkError,
}

/// Outcome of an export run
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Number of links attempted
    pub processed: usize,
    /// Paths written, one entry per successful link, in link order
    pub written: Vec<PathBuf>,
    /// Links that were skipped, in link order
    pub failures: Vec<LinkFailure>,
}

impl ExportReport {
    /// Returns true when every link was written
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the URLs of the skipped links
    pub fn failed_urls(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.url.as_str()).collect()
    }
}

/// Fetches each link and hands its body to the active sink
pub struct Exporter {
    client: Client,
    sink: Box<dyn PageSink>,
}

impl Exporter {
    pub fn new(client: Client, sink: Box<dyn PageSink>) -> Self {
        Self { client, sink }
    }

    /// Exports every link in order
    ///
    /// Writes happen in exactly the order of `links`, duplicates included.
    /// Per-link failures are logged at warn level and collected in the
    /// report; nothing is retried and partial output is left in place.
    pub async fn export(&mut self, links: &[String]) -> ExportReport {
        let mut report = ExportReport::default();

        tracing::info!("Exporting {} pages to {}", links.len(), self.sink.describe());

        for link in links {
            tracing::info!("Getting {}", link);
            report.processed += 1;

            match self.export_one(link).await {
                Ok(path) => {
                    tracing::debug!("Wrote {} to {}", link, path.display());
                    report.written.push(path);
                }
                Err(error) => {
                    tracing::warn!("{} cannot be processed: {}", link, error);
                    report.failures.push(LinkFailure {
                        url: link.clone(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            "Export complete: {} processed, {} written, {} failed",
            report.processed,
            report.written.len(),
            report.failures.len()
        );

        report
    }

    async fn export_one(&mut self, url: &str) -> Result<PathBuf, LinkError> {
        let page = fetch_page(&self.client, url).await?;
        let markup = decode_page(&page)?;
        let body = extract_body(&markup).unwrap_or_default();

        Ok(self.sink.write_page(url, &body)?)
    }
}
