//! Crawler module for page fetching and processing
//!
//! This module contains the one-level crawl logic:
//! - HTTP fetching with error classification
//! - Charset detection and decoding of fetched pages
//! - HTML parsing for qualifying links and page bodies
//! - Link collection from the parent page
//! - The per-link export loop

mod charset;
mod collector;
mod exporter;
mod fetcher;
mod parser;

pub use charset::{decode_page, decode_page_lossy, detect_encoding, DecodeError};
pub use collector::{collect_links, fetch_parent_links};
pub use exporter::{ExportReport, Exporter, LinkError, LinkFailure};
pub use fetcher::{build_http_client, fetch_page, FetchError, FetchedPage};
pub use parser::{extract_body, extract_hrefs};
