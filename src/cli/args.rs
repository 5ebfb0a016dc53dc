//! Command-line argument definitions using clap.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use crate::config::Config;

/// Recent-media downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "tweet-media-dl",
    version,
    about = "Download a user's recent photos and videos",
    long_about = "Fetches a user's recent posts through a RapidAPI Twitter proxy, downloads\n\
                  their photos and videos into medias/<username>/ and writes a data.json manifest.",
    after_help = "Examples:\n  tweet-media-dl --username <username> [--count <count>]\n  tweet-media-dl -u <username> [-c <count>]"
)]
pub struct Args {
    /// Username to scrape media from (`alice`, `@alice` or a profile URL).
    #[arg(short, long)]
    pub username: String,

    /// Number of posts to request (default 5). Passed to the proxy as given.
    #[arg(short, long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Base directory for downloads (default "medias").
    #[arg(short, long = "output")]
    pub output_directory: Option<PathBuf>,

    /// Path to an optional configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Proxy API key.
    #[arg(long = "api-key", env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Proxy API host.
    #[arg(long = "api-host", env = "API_HOST")]
    pub api_host: Option<String>,

    /// Override the request base URL (default https://<api-host>).
    #[arg(long = "api-base-url", env = "API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Path to the yt-dlp executable used for videos.
    #[arg(long = "yt-dlp", env = "YT_DLP_PATH")]
    pub yt_dlp_path: Option<PathBuf>,

    /// Hide the progress bar.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// What the entry point should do after looking at the arguments.
#[derive(Debug)]
pub enum ArgsOutcome {
    /// Arguments are usable.
    Run(Args),
    /// `--help` or `--version` output.
    Info(String),
    /// Missing or malformed arguments; carries the usage text.
    Usage(String),
    /// `--count` is not an integer.
    InvalidCount(String),
}

/// Parse an argument vector without exiting the process.
pub fn parse_args<I, T>(argv: I) -> ArgsOutcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let err = match Args::try_parse_from(argv) {
        Ok(args) => return ArgsOutcome::Run(args),
        Err(err) => err,
    };

    let rendered = err.render().to_string();

    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ArgsOutcome::Info(rendered),
        ErrorKind::ValueValidation | ErrorKind::InvalidValue if is_count_error(&err) => {
            ArgsOutcome::InvalidCount(rendered)
        }
        _ => ArgsOutcome::Usage(rendered),
    }
}

fn is_count_error(err: &clap::Error) -> bool {
    matches!(
        err.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if arg.contains("--count")
    )
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(key) = &self.api_key {
            config.api.api_key = key.clone();
        }

        if let Some(host) = &self.api_host {
            config.api.api_host = host.clone();
        }

        if let Some(base) = &self.api_base_url {
            config.api.base_url = Some(base.clone());
        }

        if let Some(dir) = &self.output_directory {
            config.options.output_directory = dir.clone();
        }

        if let Some(path) = &self.yt_dlp_path {
            config.options.yt_dlp_path = path.clone();
        }

        if self.quiet {
            config.options.show_progress = false;
        }
    }

    /// Requested post count, falling back to the configured default.
    pub fn effective_count(&self, config: &Config) -> i64 {
        self.count.unwrap_or(config.options.default_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(argv: &[&str]) -> Args {
        match parse_args(argv) {
            ArgsOutcome::Run(args) => args,
            other => panic!("expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_short_and_long_flags() {
        let args = run(&["tweet-media-dl", "-u", "alice", "-c", "2"]);
        assert_eq!(args.username, "alice");
        assert_eq!(args.count, Some(2));

        let args = run(&["tweet-media-dl", "--username", "bob", "--count", "0"]);
        assert_eq!(args.username, "bob");
        assert_eq!(args.count, Some(0));
    }

    #[test]
    fn test_default_count() {
        let args = run(&["tweet-media-dl", "-u", "alice"]);
        let config = Config::default();
        assert_eq!(args.effective_count(&config), 5);
    }

    #[test]
    fn test_missing_username_is_usage() {
        match parse_args(["tweet-media-dl"]) {
            ArgsOutcome::Usage(text) => assert!(text.contains("--username")),
            other => panic!("expected Usage, got {:?}", other),
        }

        assert!(matches!(
            parse_args(["tweet-media-dl", "--user", "alice"]),
            ArgsOutcome::Usage(_)
        ));
        assert!(matches!(
            parse_args(["tweet-media-dl", "-u"]),
            ArgsOutcome::Usage(_)
        ));
    }

    #[test]
    fn test_non_integer_count() {
        assert!(matches!(
            parse_args(["tweet-media-dl", "-u", "alice", "-c", "many"]),
            ArgsOutcome::InvalidCount(_)
        ));
    }

    #[test]
    fn test_any_integer_count_is_accepted() {
        let args = run(&["tweet-media-dl", "-u", "alice", "-c", "-3"]);
        assert_eq!(args.count, Some(-3));

        let args = run(&["tweet-media-dl", "-u", "alice", "--count", "99999999999"]);
        assert_eq!(args.count, Some(99_999_999_999));
    }

    #[test]
    fn test_help_is_info() {
        assert!(matches!(
            parse_args(["tweet-media-dl", "--help"]),
            ArgsOutcome::Info(_)
        ));
    }

    #[test]
    fn test_merge_into_config() {
        let args = run(&[
            "tweet-media-dl",
            "-u",
            "alice",
            "-o",
            "/tmp/out",
            "--api-base-url",
            "http://127.0.0.1:9000",
            "--yt-dlp",
            "/opt/yt-dlp",
            "-q",
        ]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.options.output_directory, PathBuf::from("/tmp/out"));
        assert_eq!(config.api.base_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert_eq!(config.options.yt_dlp_path, PathBuf::from("/opt/yt-dlp"));
        assert!(!config.options.show_progress);
    }
}
