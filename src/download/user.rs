//! Per-user download run: resolve, list, fetch, write the manifest.

use crate::api::TwitterApi;
use crate::config::Config;
use crate::download::media::MediaDownloader;
use crate::download::state::DownloadState;
use crate::error::Result;
use crate::fs::{write_manifest, MediaLayout};
use crate::media::{MediaRecord, MediaType};
use crate::output::{create_item_bar, hidden_bar};

/// Download the `count` most recent media posts of `state.username`.
///
/// Resolution or listing failures return early, before anything is created
/// on disk. Once listing succeeds, per-item failures are logged and counted
/// and the manifest is always written.
pub async fn download_user_media(
    api: &TwitterApi,
    downloader: &MediaDownloader,
    config: &Config,
    state: &mut DownloadState,
    count: i64,
) -> Result<Vec<MediaRecord>> {
    let layout = MediaLayout::new(&config.options.output_directory, &state.username)?;

    let user_id = api.get_user_id(&state.username).await?;
    tracing::info!("Resolved @{} to user id {}", state.username, user_id);
    state.user_id = Some(user_id.clone());

    let records = api.get_user_media(&user_id, count).await?;
    tracing::info!("Found {} media posts for @{}", records.len(), state.username);
    state.record_count = records.len() as u64;

    layout.create_dirs().await?;

    let bar = if config.options.show_progress {
        create_item_bar(records.len() as u64, "Downloading")
    } else {
        hidden_bar()
    };

    for record in &records {
        download_record(downloader, &layout, state, record).await;
        bar.inc(1);
    }
    bar.finish_and_clear();

    let manifest_path = layout.manifest_path();
    write_manifest(&manifest_path, &records).await?;
    tracing::info!("Wrote {}", manifest_path.display());
    state.manifest_path = Some(manifest_path);

    Ok(records)
}

/// Fetch one record's file, recording the outcome in `state`.
async fn download_record(
    downloader: &MediaDownloader,
    layout: &MediaLayout,
    state: &mut DownloadState,
    record: &MediaRecord,
) {
    let (Some(media_type), Some(path)) = (record.media_type.as_ref(), layout.media_path(record))
    else {
        tracing::debug!(
            "Skipping record {} of type {:?}",
            record.id,
            record.media_type
        );
        state.increment_skipped();
        return;
    };

    match downloader
        .download(record.media_url.as_deref(), &path, media_type)
        .await
    {
        Ok(()) => {
            tracing::debug!("Downloaded: {}", path.display());
            match media_type {
                MediaType::Photo => state.increment_pic(),
                MediaType::Video => state.increment_vid(),
                MediaType::Other(_) => {}
            }
        }
        Err(e) => {
            tracing::error!("Failed to download media {}: {}", record.id, e);
            state.increment_failed();
        }
    }
}
