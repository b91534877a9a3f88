use crate::config::types::{HttpConfig, PdfConfig, Settings};
use crate::ConfigError;

/// Validates the entire settings file
pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
    validate_http_config(&settings.http)?;
    validate_pdf_config(&settings.pdf)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates PDF renderer configuration
fn validate_pdf_config(config: &PdfConfig) -> Result<(), ConfigError> {
    if config.wkhtmltopdf_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "wkhtmltopdf-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
