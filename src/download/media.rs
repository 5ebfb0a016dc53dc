//! Media file downloading.

use std::path::Path;

use reqwest::Client;

use crate::download::video::VideoExtractor;
use crate::error::{Error, Result};
use crate::media::MediaType;

/// Fetches one media file to disk.
pub struct MediaDownloader {
    client: Client,
    extractor: Box<dyn VideoExtractor>,
}

impl MediaDownloader {
    pub fn new(client: Client, extractor: Box<dyn VideoExtractor>) -> Self {
        Self { client, extractor }
    }

    /// Download `url` to `output` according to `media_type`.
    ///
    /// Photos are fetched directly, videos go through the extractor and any
    /// other type writes nothing. Callers decide what a failure means; the
    /// file is not guaranteed to exist afterwards.
    pub async fn download(
        &self,
        url: Option<&str>,
        output: &Path,
        media_type: &MediaType,
    ) -> Result<()> {
        if let MediaType::Other(other) = media_type {
            tracing::debug!("Not downloading media of type '{}'", other);
            return Ok(());
        }

        let url = url.ok_or_else(|| Error::Download("no media url".to_string()))?;
        url::Url::parse(url)?;

        match media_type {
            MediaType::Photo => self.download_direct(url, output).await,
            MediaType::Video => {
                tracing::debug!("Handing {} to {}", url, self.extractor.name());
                self.extractor.extract(url, output).await?;
                tracing::info!("Successfully downloaded video to {}", output.display());
                Ok(())
            }
            MediaType::Other(_) => Ok(()),
        }
    }

    /// Plain GET, whole body buffered then written (overwriting).
    async fn download_direct(&self, url: &str, output: &Path) -> Result<()> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Download(format!(
                "Failed to download media from {}: HTTP {}",
                url,
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        tokio::fs::write(output, &bytes).await?;

        tracing::debug!("Wrote {} bytes to {}", bytes.len(), output.display());
        Ok(())
    }
}
