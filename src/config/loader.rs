//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of posts requested from the media endpoint.
pub const DEFAULT_COUNT: i64 = 5;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Proxy API credentials.
///
/// Built once at start-up and handed to the client by reference; nothing
/// reads the environment after that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Value of the `x-rapidapi-key` header.
    #[serde(default)]
    pub api_key: String,

    /// Proxy host, sent as `x-rapidapi-host` and used to build request URLs.
    #[serde(default)]
    pub api_host: String,

    /// Overrides `https://{api_host}` as the request base.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ApiConfig {
    pub fn new(api_key: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_host: api_host.into(),
            base_url: None,
        }
    }

    /// Base URL every endpoint is joined onto, without a trailing slash.
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}", self.api_host),
        }
    }
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root directory; each user gets a folder beneath it.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Number of posts requested when `--count` is not given.
    #[serde(default = "default_count")]
    pub default_count: i64,

    /// Path or name of the yt-dlp executable.
    #[serde(default = "default_yt_dlp_path")]
    pub yt_dlp_path: PathBuf,

    /// Whether to show the per-item progress bar.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            default_count: DEFAULT_COUNT,
            yt_dlp_path: default_yt_dlp_path(),
            show_progress: true,
        }
    }
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("medias")
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

fn default_yt_dlp_path() -> PathBuf {
    PathBuf::from("yt-dlp")
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file when it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
