//! Download module for content downloading.
//!
//! This module provides:
//! - Download state tracking
//! - Per-user orchestration (resolve, list, download, manifest)
//! - Photo downloading and video extraction

pub mod media;
pub mod state;
pub mod user;
pub mod video;

pub use media::MediaDownloader;
pub use state::DownloadState;
pub use user::download_user_media;
pub use video::{VideoExtractor, YtDlpExtractor};
