//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     tweet-media-dl                                    ║
║     Recent photos and videos of a user, to disk       ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print run summary before any request is made.
pub fn print_run_summary(username: &str, count: i64, output_dir: &str) {
    println!();
    println!("{}", style("Run:").bold());
    println!("  User:      @{}", username);
    println!("  Count:     {}", count);
    println!("  Directory: {}", output_dir);
    println!();
}
