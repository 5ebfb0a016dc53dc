//! Media record representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of media content, as reported by the first media entity of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Photo,
    Video,
    /// Anything else (e.g. `animated_gif`), kept verbatim.
    Other(String),
}

impl MediaType {
    /// Get the folder name for this media type, if it is downloaded at all.
    pub fn folder_name(&self) -> Option<&'static str> {
        match self {
            MediaType::Photo => Some("photos"),
            MediaType::Video => Some("videos"),
            MediaType::Other(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Photo => "photo",
            MediaType::Video => "video",
            MediaType::Other(other) => other,
        }
    }
}

impl From<String> for MediaType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "photo" => MediaType::Photo,
            "video" => MediaType::Video,
            _ => MediaType::Other(value),
        }
    }
}

impl From<&str> for MediaType {
    fn from(value: &str) -> Self {
        MediaType::from(value.to_string())
    }
}

impl From<MediaType> for String {
    fn from(value: MediaType) -> Self {
        match value {
            MediaType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One qualifying post, as written to the manifest.
///
/// `id` is assigned locally in traversal order and has nothing to do with
/// the platform's own post id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub id: u32,
    pub created_at: Option<String>,
    pub text: Option<String>,
    pub media_type: Option<MediaType>,
    pub media_url: Option<String>,
}

impl MediaRecord {
    /// File name the media is saved under, or `None` for skipped types.
    pub fn file_name(&self) -> Option<String> {
        match self.media_type.as_ref()? {
            MediaType::Photo => Some(format!("{}.jpg", self.id)),
            MediaType::Video => Some(format!("video_{}.mp4", self.id)),
            MediaType::Other(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, media_type: Option<MediaType>) -> MediaRecord {
        MediaRecord {
            id,
            created_at: None,
            text: None,
            media_type,
            media_url: None,
        }
    }

    #[test]
    fn test_media_type_strings() {
        assert_eq!(MediaType::from("photo"), MediaType::Photo);
        assert_eq!(MediaType::from("video"), MediaType::Video);
        assert_eq!(
            MediaType::from("animated_gif"),
            MediaType::Other("animated_gif".to_string())
        );
        assert_eq!(MediaType::Other("animated_gif".into()).to_string(), "animated_gif");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(record(3, Some(MediaType::Photo)).file_name().unwrap(), "3.jpg");
        assert_eq!(
            record(7, Some(MediaType::Video)).file_name().unwrap(),
            "video_7.mp4"
        );
        assert!(record(1, Some(MediaType::from("animated_gif"))).file_name().is_none());
        assert!(record(1, None).file_name().is_none());
    }

    #[test]
    fn test_serialized_shape() {
        let mut rec = record(1, Some(MediaType::Video));
        rec.created_at = Some("Wed Oct 10 20:19:24 +0000 2018".to_string());
        rec.media_url = Some("https://video.twimg.com/a.mp4".to_string());

        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "created_at": "Wed Oct 10 20:19:24 +0000 2018",
                "text": null,
                "media_type": "video",
                "media_url": "https://video.twimg.com/a.mp4"
            })
        );
    }
}
