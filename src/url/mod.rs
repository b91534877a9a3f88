//! URL handling module for Download-All
//!
//! This module provides the href qualification predicate, scheme detection,
//! site-path derivation, href resolution and output file-name derivation.
//! All of these are pure string functions; nothing here touches the network.

mod filename;
mod matcher;
mod resolve;

// Re-export main functions
pub use filename::{file_name_for, pdf_name_for};
pub use matcher::{has_http_scheme, is_qualifying_href, QUALIFYING_SUFFIX};
pub use resolve::{derive_site_path, ensure_scheme, normalize_site_path, parse_page_url, resolve_href};
