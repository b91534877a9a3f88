//! Download-All main entry point
//!
//! This is the command-line interface for the Download-All page consolidator.

use clap::Parser;
use download_all::config::{load_settings, OutputMode, RunConfig, Settings, DEFAULT_OUTFILE};
use download_all::DownloadError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Download-All: consolidate the pages a parent page links to
///
/// Downloads every page linked from the parent page whose link ends in
/// `html` and saves each page's <body> in the current directory: appended
/// to one combined file (default), as separate HTML files, or as separate
/// PDF files. Files with the same name are overwritten, except the combined
/// file, which is appended to on every run.
#[derive(Parser, Debug)]
#[command(name = "download-all")]
#[command(version)]
#[command(about = "Download every page a parent page links to", long_about = None)]
struct Cli {
    /// Full URL of the parent page (http:// is added when missing)
    #[arg(value_name = "URL")]
    url: String,

    /// Prefix for relative links (default: the parent URL minus its last segment)
    #[arg(value_name = "SITEPATH")]
    sitepath: Option<String>,

    /// Combined output file name
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTFILE)]
    outfile: PathBuf,

    /// Save pages to separate HTML files named after each link
    #[arg(short, long, conflicts_with = "pdf")]
    separate: bool,

    /// Save pages as separate PDF files (requires wkhtmltopdf)
    #[arg(short, long, conflicts_with = "separate")]
    pdf: bool,

    /// Optional TOML settings file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };

    if cli.pdf && cli.outfile != PathBuf::from(DEFAULT_OUTFILE) {
        tracing::warn!("--outfile has no effect with --pdf");
    } else if cli.separate && cli.outfile != PathBuf::from(DEFAULT_OUTFILE) {
        tracing::warn!("--outfile has no effect with --separate");
    }

    match download_all::run(config).await {
        Ok(report) => {
            if !report.is_complete() {
                tracing::warn!(
                    "{} of {} pages could not be saved",
                    report.failures.len(),
                    report.processed
                );
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("{}. Ending program.", e);
            std::process::exit(1);
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("download_all=info,warn"),
            1 => EnvFilter::new("download_all=debug,info"),
            2 => EnvFilter::new("download_all=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn build_config(cli: &Cli) -> Result<RunConfig, DownloadError> {
    let settings = match &cli.config {
        Some(path) => {
            tracing::info!("Loading settings from: {}", path.display());
            load_settings(path)?
        }
        None => Settings::default(),
    };

    let mode = OutputMode::from_flags(cli.separate, cli.pdf, cli.outfile.clone());
    let config = RunConfig::new(&cli.url, cli.sitepath.as_deref(), mode, settings)?;

    tracing::debug!(
        "Parent page {}, site path {}, mode {:?}",
        config.parent_url,
        config.site_path,
        config.mode
    );

    Ok(config)
}
