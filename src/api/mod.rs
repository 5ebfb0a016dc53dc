//! Proxy API module.
//!
//! This module provides:
//! - HTTP client for the RapidAPI Twitter proxy
//! - User id resolution and media listing
//! - API response types

pub mod client;
pub mod types;

pub use client::TwitterApi;
pub use types::*;
