//! Output directory layout.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::media::{MediaRecord, MediaType};

/// Name of the manifest written next to the media folders.
pub const MANIFEST_FILE: &str = "data.json";

/// Where one user's files go: `<root>/<username>/{photos,videos,data.json}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLayout {
    user_dir: PathBuf,
}

impl MediaLayout {
    /// Build the layout for `username` under `root`.
    ///
    /// The username must be a single plain path component.
    pub fn new(root: &Path, username: &str) -> Result<Self> {
        let mut components = Path::new(username).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(Self {
                user_dir: root.join(username),
            }),
            _ => Err(Error::InvalidFilename(format!(
                "'{}' is not a single path component",
                username
            ))),
        }
    }

    pub fn user_dir(&self) -> &Path {
        &self.user_dir
    }

    pub fn photos_dir(&self) -> PathBuf {
        self.user_dir.join("photos")
    }

    pub fn videos_dir(&self) -> PathBuf {
        self.user_dir.join("videos")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.user_dir.join(MANIFEST_FILE)
    }

    /// Destination of a record's file, `None` when its type is not downloaded.
    pub fn media_path(&self, record: &MediaRecord) -> Option<PathBuf> {
        let file_name = record.file_name()?;
        let dir = match record.media_type.as_ref()? {
            MediaType::Photo => self.photos_dir(),
            MediaType::Video => self.videos_dir(),
            MediaType::Other(_) => return None,
        };
        Some(dir.join(file_name))
    }

    /// Create the user, photo and video directories. Existing ones are fine.
    pub async fn create_dirs(&self) -> Result<()> {
        for dir in [self.user_dir.clone(), self.photos_dir(), self.videos_dir()] {
            ensure_dir(&dir).await?;
        }
        Ok(())
    }
}

/// Ensure a directory exists, creating it if necessary.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path).await?;
    Ok(())
}
