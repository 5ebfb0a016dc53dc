//! Statistics reporting.

use console::style;

use crate::download::DownloadState;

/// Print statistics for a finished user run.
pub fn print_user_stats(state: &DownloadState) {
    println!();
    println!(
        "{}",
        style(format!("Statistics for @{}:", state.username)).bold()
    );
    if let Some(user_id) = &state.user_id {
        println!("  User id:  {}", user_id);
    }
    println!("  Posts:    {}", state.record_count);
    println!("  Pictures: {}", state.pic_count);
    println!("  Videos:   {}", state.vid_count);
    println!("  Skipped:  {} (unsupported type)", state.skipped_count);
    if state.failed_count > 0 {
        println!("  Failed:   {}", style(state.failed_count).red());
    }
    println!("  Total:    {} downloaded", state.total_downloaded());
    if let Some(path) = &state.manifest_path {
        println!("  Manifest: {}", path.display());
    }
}
