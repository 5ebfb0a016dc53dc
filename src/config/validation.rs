//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;

/// Maximum username length accepted by the platform.
const MAX_USERNAME_LENGTH: usize = 15;

/// Validate the entire configuration.
///
/// Missing credentials are only warned about: the proxy rejects such
/// requests with a non-200 status, which is reported at that point.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.api.api_key.trim().is_empty() {
        tracing::warn!("API_KEY is not set; requests will be rejected by the proxy");
    }

    if config.api.api_host.trim().is_empty() && config.api.base_url.is_none() {
        tracing::warn!("API_HOST is not set; requests will fail");
    }

    if config.options.output_directory.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "output_directory".to_string(),
            message: "Output directory cannot be empty".to_string(),
        });
    }

    if let Some(base) = &config.api.base_url {
        url::Url::parse(base).map_err(|e| Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("'{}' is not a valid URL: {}", base, e),
        })?;
    }

    Ok(())
}

/// Normalize a username argument.
///
/// Accepts `alice`, `@alice` or a profile URL such as
/// `https://x.com/alice`, and returns the bare handle.
pub fn parse_username(input: &str) -> Result<String> {
    let input = input.trim();

    let candidate = if input.starts_with("http://") || input.starts_with("https://") {
        let profile_pattern =
            Regex::new(r"^https?://(?:www\.|mobile\.)?(?:twitter|x)\.com/([^/?#]+)")
                .map_err(|e| Error::Config(e.to_string()))?;

        profile_pattern
            .captures(input)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
            .ok_or_else(|| {
                Error::InvalidUsername(format!("Could not extract username from URL: {}", input))
            })?
    } else {
        input.trim_start_matches('@')
    };

    validate_username(candidate)?;
    Ok(candidate.to_string())
}

/// Validate a bare username (no leading `@`).
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(Error::InvalidUsername("username cannot be empty".to_string()));
    }

    if username.len() > MAX_USERNAME_LENGTH {
        return Err(Error::InvalidUsername(format!(
            "'{}' is too long (maximum {} characters)",
            username, MAX_USERNAME_LENGTH
        )));
    }

    let username_pattern =
        Regex::new(r"^[A-Za-z0-9_]+$").map_err(|e| Error::Config(e.to_string()))?;

    if !username_pattern.is_match(username) {
        return Err(Error::InvalidUsername(format!(
            "'{}' contains invalid characters. Only letters, digits and underscores allowed.",
            username
        )));
    }

    Ok(())
}
