use crate::config::types::{OutputMode, RunConfig, Settings};
use crate::config::validation::validate;
use crate::url::{derive_site_path, ensure_scheme, normalize_site_path, parse_page_url};
use crate::ConfigError;
use std::path::{Path, PathBuf};

/// Loads and parses a settings file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML settings file
///
/// # Returns
///
/// * `Ok(Settings)` - Successfully loaded and validated settings
/// * `Err(ConfigError)` - Failed to load, parse, or validate the settings
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use download_all::config::load_settings;
///
/// let settings = load_settings(Path::new("download-all.toml")).unwrap();
/// println!("Timeout: {}s", settings.http.timeout_secs);
/// ```
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_settings(&content)
}

/// Parses and validates settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    let settings: Settings = toml::from_str(content)?;
    validate(&settings)?;
    Ok(settings)
}

impl RunConfig {
    /// Builds a run configuration from command-line values
    ///
    /// The parent URL gets `http://` prefixed when it has no HTTP(S) scheme.
    /// Without an explicit site path, the parent URL minus its last path
    /// segment is used. Output goes to the current directory.
    ///
    /// # Returns
    ///
    /// * `Ok(RunConfig)` - Parent URL parses and has a host
    /// * `Err(ConfigError)` - The parent URL or site path is unusable
    pub fn new(
        parent_url: &str,
        site_path: Option<&str>,
        mode: OutputMode,
        settings: Settings,
    ) -> Result<Self, ConfigError> {
        let parent_url = ensure_scheme(parent_url);
        parse_page_url(&parent_url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;

        let site_path = match site_path {
            Some(path) if !path.trim().is_empty() => normalize_site_path(path),
            Some(_) => {
                return Err(ConfigError::Validation(
                    "site path cannot be empty".to_string(),
                ))
            }
            None => derive_site_path(&parent_url),
        };

        Ok(Self {
            parent_url,
            site_path,
            mode,
            output_dir: PathBuf::from("."),
            http: settings.http,
            pdf: settings.pdf,
        })
    }

    /// Sends separate files and PDFs to `dir` instead of the current directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
