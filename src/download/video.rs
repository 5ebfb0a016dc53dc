//! Video extraction through an external tool.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Capability: given a video URL, produce an mp4 file at `output`.
#[async_trait]
pub trait VideoExtractor: Send + Sync {
    /// Human-readable name of the extractor.
    fn name(&self) -> &'static str;

    /// Fetch the video at `url` and write it to `output`.
    async fn extract(&self, url: &str, output: &Path) -> Result<()>;
}

/// Extractor backed by the `yt-dlp` executable.
#[derive(Debug, Clone)]
pub struct YtDlpExtractor {
    binary: PathBuf,
}

impl YtDlpExtractor {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Arguments passed to yt-dlp for one download.
    fn args(url: &str, output: &Path) -> Vec<String> {
        vec![
            "--format".to_string(),
            "mp4".to_string(),
            "--output".to_string(),
            output.display().to_string(),
            "--quiet".to_string(),
            "--no-warnings".to_string(),
            "--force-overwrites".to_string(),
            url.to_string(),
        ]
    }

    /// Check whether the binary can be launched.
    pub async fn is_available(&self) -> bool {
        match Command::new(&self.binary).arg("--version").output().await {
            Ok(output) if output.status.success() => {
                let version = String::from_utf8_lossy(&output.stdout);
                tracing::debug!("yt-dlp is available, version: {}", version.trim());
                true
            }
            Ok(_) => {
                tracing::warn!("yt-dlp --version failed");
                false
            }
            Err(e) => {
                tracing::warn!("yt-dlp not found: {}", e);
                false
            }
        }
    }
}

impl Default for YtDlpExtractor {
    fn default() -> Self {
        Self::new("yt-dlp")
    }
}

#[async_trait]
impl VideoExtractor for YtDlpExtractor {
    fn name(&self) -> &'static str {
        "yt-dlp"
    }

    async fn extract(&self, url: &str, output: &Path) -> Result<()> {
        tracing::debug!("Extracting video with yt-dlp: {}", url);

        let result = Command::new(&self.binary)
            .args(Self::args(url, output))
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::ExtractorNotFound
                } else {
                    Error::Extractor(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::Extractor(format!(
                "yt-dlp exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args() {
        let args = YtDlpExtractor::args(
            "https://video.twimg.com/a.mp4",
            Path::new("medias/alice/videos/video_2.mp4"),
        );
        assert_eq!(
            args,
            vec![
                "--format",
                "mp4",
                "--output",
                "medias/alice/videos/video_2.mp4",
                "--quiet",
                "--no-warnings",
                "--force-overwrites",
                "https://video.twimg.com/a.mp4",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_binary() {
        let extractor = YtDlpExtractor::new("/nonexistent/yt-dlp-binary");
        assert!(!extractor.is_available().await);

        let dir = tempfile::tempdir().unwrap();
        let result = extractor
            .extract("https://video.twimg.com/a.mp4", &dir.path().join("v.mp4"))
            .await;
        assert!(matches!(result, Err(Error::ExtractorNotFound)));
    }
}
