//! `data.json` manifest writer.

use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::media::MediaRecord;

/// Serialize records as a JSON array indented with four spaces.
pub fn render_manifest(records: &[MediaRecord]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut serializer)?;
    Ok(out)
}

/// Write the manifest, replacing any previous one.
pub async fn write_manifest(path: &Path, records: &[MediaRecord]) -> Result<()> {
    let content = render_manifest(records)?;
    tokio::fs::write(path, content).await?;
    tracing::debug!("Wrote manifest with {} records to {}", records.len(), path.display());
    Ok(())
}

/// Read a manifest back.
#[cfg(test)]
pub async fn read_manifest(path: &Path) -> Result<Vec<MediaRecord>> {
    let content = tokio::fs::read(path).await?;
    Ok(serde_json::from_slice(&content)?)
}
