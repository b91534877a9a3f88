//! Configuration module for Download-All
//!
//! This module turns command-line values and an optional TOML settings file
//! into a validated [`RunConfig`].
//!
//! # Example
//!
//! ```no_run
//! use download_all::config::{load_settings, OutputMode, RunConfig};
//! use std::path::Path;
//!
//! let settings = load_settings(Path::new("download-all.toml")).unwrap();
//! let config = RunConfig::new(
//!     "http://example.com/book/index.html",
//!     None,
//!     OutputMode::SeparateFiles,
//!     settings,
//! )
//! .unwrap();
//! println!("Relative links resolve against {}", config.site_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{HttpConfig, OutputMode, PdfConfig, RunConfig, Settings, DEFAULT_OUTFILE};

// Re-export parser functions
pub use parser::{load_settings, parse_settings};
