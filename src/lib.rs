//! tweet-media-dl - download a user's recent photos and videos
//!
//! This library fetches a user's recent posts through a RapidAPI Twitter
//! proxy, pulls photo and video URLs out of the timeline payload, saves the
//! files and writes a JSON manifest.
//!
//! # Features
//!
//! - Username to user id resolution
//! - Media listing with highest-bitrate mp4 selection for videos
//! - Direct photo downloads, video extraction through yt-dlp
//! - `data.json` manifest per user
//!
//! # Example
//!
//! ```no_run
//! use tweet_media_dl::{
//!     download_user_media, ApiConfig, Config, DownloadState, MediaDownloader, TwitterApi,
//!     YtDlpExtractor,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.api = ApiConfig::new("my-key", "twitter-api45.p.rapidapi.com");
//!
//!     let api = TwitterApi::new(config.api.clone())?;
//!     let downloader =
//!         MediaDownloader::new(api.http_client().clone(), Box::new(YtDlpExtractor::default()));
//!
//!     let mut state = DownloadState::new("nasa");
//!     let records = download_user_media(&api, &downloader, &config, &mut state, 5).await?;
//!     println!("{} posts", records.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use api::{ApiReply, TwitterApi};
pub use config::{ApiConfig, Config};
pub use download::{
    download_user_media, DownloadState, MediaDownloader, VideoExtractor, YtDlpExtractor,
};
pub use error::{Error, Result};
pub use media::{MediaRecord, MediaType};
