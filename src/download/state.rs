//! Download state tracking.

use std::path::PathBuf;

/// Per-user download state and statistics.
#[derive(Debug, Default)]
pub struct DownloadState {
    // User info
    pub username: String,
    pub user_id: Option<String>,

    // Paths
    pub manifest_path: Option<PathBuf>,

    // Statistics
    pub record_count: u64,
    pub pic_count: u64,
    pub vid_count: u64,
    pub skipped_count: u64,
    pub failed_count: u64,
}

impl DownloadState {
    /// Create a new download state for a user.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Default::default()
        }
    }

    /// Increment picture count.
    pub fn increment_pic(&mut self) {
        self.pic_count += 1;
    }

    /// Increment video count.
    pub fn increment_vid(&mut self) {
        self.vid_count += 1;
    }

    /// A record whose type is not downloaded.
    pub fn increment_skipped(&mut self) {
        self.skipped_count += 1;
    }

    pub fn increment_failed(&mut self) {
        self.failed_count += 1;
    }

    /// Get total downloaded count.
    pub fn total_downloaded(&self) -> u64 {
        self.pic_count + self.vid_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut state = DownloadState::new("alice");
        state.increment_pic();
        state.increment_pic();
        state.increment_vid();
        state.increment_failed();
        state.increment_skipped();

        assert_eq!(state.username, "alice");
        assert_eq!(state.total_downloaded(), 3);
        assert_eq!(state.failed_count, 1);
        assert_eq!(state.skipped_count, 1);
    }
}
