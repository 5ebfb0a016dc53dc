//! API response type definitions.
//!
//! Timeline entries are walked field by field in [`crate::media::parser`];
//! only video variants are decoded into a struct, one at a time.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw reply from [`TwitterApi::request`](crate::api::TwitterApi::request).
///
/// Mirrors the `(body, status, error)` triple: a failed call carries no body,
/// the received status (or 500 when nothing was received) and an error text.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub body: Option<Value>,
    pub status: u16,
    pub error: Option<String>,
}

impl ApiReply {
    /// Status used when no response was received at all.
    pub const NO_RESPONSE_STATUS: u16 = 500;

    pub fn ok(body: Value, status: u16) -> Self {
        Self {
            body: Some(body),
            status,
            error: None,
        }
    }

    pub fn failed(status: u16, error: impl Into<String>) -> Self {
        Self {
            body: None,
            status,
            error: Some(error.into()),
        }
    }

    /// Error text for logging, falling back to the status when none was captured.
    pub fn error_text(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| format!("unexpected status {}", self.status))
    }
}

/// One encoding of a video, decoded on its own from `video_info.variants`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoVariant {
    pub content_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_bitrate")]
    pub bitrate: Option<u64>,
    pub url: Option<String>,
}

/// Accept integer or float bitrates; anything else reads as absent.
fn lenient_bitrate<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0) as u64))))
}
