//! Configuration module for tweet-media-dl.
//!
//! This module handles:
//! - Loading configuration from an optional TOML file
//! - Credentials (`API_KEY`, `API_HOST`) supplied through `.env` or the environment
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{ApiConfig, Config, OptionsConfig, DEFAULT_COUNT};
pub use validation::{parse_username, validate_config, validate_username};
