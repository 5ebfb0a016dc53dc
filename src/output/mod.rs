//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Statistics reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{print_banner, print_info, print_run_summary, print_success, print_warning};
pub use progress::{create_item_bar, hidden_bar};
pub use stats::print_user_stats;
