//! Vendor response parsing.
//!
//! Navigation is done with [`lookup`], which walks a fixed path and reports
//! the first segment that is missing, so each failure point surfaces as its
//! own [`Error::UnexpectedFormat`].

use serde::Deserialize;
use serde_json::Value;

use crate::api::types::VideoVariant;
use crate::error::{Error, Result};
use crate::media::item::{MediaRecord, MediaType};

/// Entry-type tag of timeline entries that hold an actual post.
pub const TIMELINE_ITEM: &str = "TimelineTimelineItem";

/// Only this container is considered when picking a video variant.
const MP4_CONTENT_TYPE: &str = "video/mp4";

/// One step of a JSON path.
#[derive(Debug, Clone, Copy)]
pub enum Segment<'p> {
    Key(&'p str),
    Index(usize),
}

use Segment::{Index, Key};

/// `result.data.user.result.rest_id`
const USER_ID_PATH: &[Segment<'static>] = &[
    Key("result"),
    Key("data"),
    Key("user"),
    Key("result"),
    Key("rest_id"),
];

/// `result.timeline.instructions[1].entries`
const ENTRIES_PATH: &[Segment<'static>] = &[
    Key("result"),
    Key("timeline"),
    Key("instructions"),
    Index(1),
    Key("entries"),
];

/// `content.entryType` of a timeline entry.
const ENTRY_TYPE_PATH: &[Segment<'static>] = &[Key("content"), Key("entryType")];

/// `content.itemContent.tweet_results.result.legacy`
const LEGACY_PATH: &[Segment<'static>] = &[
    Key("content"),
    Key("itemContent"),
    Key("tweet_results"),
    Key("result"),
    Key("legacy"),
];

/// `extended_entities.media[0]`, relative to `legacy`.
const FIRST_MEDIA_PATH: &[Segment<'static>] = &[Key("extended_entities"), Key("media"), Index(0)];

/// `video_info.variants`, relative to a media item.
const VARIANTS_PATH: &[Segment<'static>] = &[Key("video_info"), Key("variants")];

/// Walk `path` from `root`, failing on the first missing key or index.
pub fn lookup<'a>(root: &'a Value, path: &[Segment<'_>]) -> Result<&'a Value> {
    let mut current = root;
    let mut walked = String::new();

    for segment in path {
        let next = match *segment {
            Key(key) => {
                if !walked.is_empty() {
                    walked.push('.');
                }
                walked.push_str(key);
                current.get(key)
            }
            Index(index) => {
                walked.push_str(&format!("[{}]", index));
                current.get(index)
            }
        };

        current = next.ok_or_else(|| Error::UnexpectedFormat(walked.clone()))?;
    }

    Ok(current)
}

/// Extract the user identifier from a `user` response.
///
/// The proxy may encode it as a string or as an integer; either way it is
/// returned as an opaque string.
pub fn extract_user_id(body: &Value) -> Result<String> {
    match lookup(body, USER_ID_PATH)? {
        Value::String(id) => Ok(id.clone()),
        Value::Number(id) => Ok(id.to_string()),
        _ => Err(Error::UnexpectedFormat(
            "result.data.user.result.rest_id (not a string or number)".to_string(),
        )),
    }
}

/// Get the timeline entries of a `user-media` response.
pub fn extract_entries(body: &Value) -> Result<&[Value]> {
    lookup(body, ENTRIES_PATH)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| {
            Error::UnexpectedFormat(
                "result.timeline.instructions[1].entries (not an array)".to_string(),
            )
        })
}

/// Build manifest records from a `user-media` response.
///
/// Entries that are not posts or carry no media are skipped; ids are
/// assigned 1.. to the emitted records only. Only the fields that end up in
/// a record are read, so malformed data elsewhere in an entry is ignored.
pub fn extract_media_records(body: &Value) -> Result<Vec<MediaRecord>> {
    let entries = extract_entries(body)?;
    let mut records = Vec::new();

    for entry in entries {
        let Some((legacy, media)) = post_media(entry) else {
            continue;
        };

        let id = records.len() as u32 + 1;
        records.push(build_record(id, legacy, media));
    }

    Ok(records)
}

/// The legacy block and first media item of a qualifying entry.
fn post_media(entry: &Value) -> Option<(&Value, &Value)> {
    let entry_type = lookup(entry, ENTRY_TYPE_PATH).ok()?;
    if entry_type.as_str() != Some(TIMELINE_ITEM) {
        return None;
    }

    let legacy = lookup(entry, LEGACY_PATH).ok()?;
    // Only the first attachment decides type and URL.
    let media = lookup(legacy, FIRST_MEDIA_PATH).ok()?;
    Some((legacy, media))
}

fn build_record(id: u32, legacy: &Value, media: &Value) -> MediaRecord {
    let media_type = string_field(media, "type").map(MediaType::from);
    let media_url = match &media_type {
        Some(MediaType::Video) => {
            let variants = video_variants(media);
            select_best_variant(&variants).and_then(|variant| variant.url.clone())
        }
        Some(MediaType::Photo) => photo_url(media),
        _ => None,
    };

    MediaRecord {
        id,
        created_at: string_field(legacy, "created_at"),
        text: string_field(legacy, "full_text"),
        media_type,
        media_url,
    }
}

/// `video_info.variants`, each decoded on its own; unreadable ones are dropped.
fn video_variants(media: &Value) -> Vec<VideoVariant> {
    let Some(raw) = lookup(media, VARIANTS_PATH).ok().and_then(Value::as_array) else {
        return Vec::new();
    };

    raw.iter()
        .enumerate()
        .filter_map(|(index, variant)| match VideoVariant::deserialize(variant) {
            Ok(variant) => Some(variant),
            Err(e) => {
                tracing::warn!("Skipping unreadable video variant {}: {}", index, e);
                None
            }
        })
        .collect()
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Pick the highest-bitrate mp4 variant; a missing bitrate counts as 0 and
/// the first variant wins a tie.
pub fn select_best_variant(variants: &[VideoVariant]) -> Option<&VideoVariant> {
    variants
        .iter()
        .filter(|v| v.content_type.as_deref() == Some(MP4_CONTENT_TYPE))
        .fold(None, |best: Option<&VideoVariant>, candidate| match best {
            Some(b) if b.bitrate.unwrap_or(0) >= candidate.bitrate.unwrap_or(0) => Some(b),
            _ => Some(candidate),
        })
}

/// Direct image URL of a photo item.
fn photo_url(media: &Value) -> Option<String> {
    string_field(media, "media_url_https").or_else(|| string_field(media, "media_url"))
}
