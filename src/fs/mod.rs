//! Filesystem module.
//!
//! Provides:
//! - Per-user output layout and directory creation
//! - The `data.json` manifest

pub mod manifest;
pub mod paths;

#[cfg(test)]
pub use manifest::read_manifest;
pub use manifest::{render_manifest, write_manifest};
pub use paths::{ensure_dir, MediaLayout, MANIFEST_FILE};
