//! tweet-media-dl - CLI entry point.

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use tweet_media_dl::{
    api::TwitterApi,
    cli::{parse_args, resolve_invocation, Args, Invocation},
    config::{validate_config, Config},
    download::{download_user_media, DownloadState, MediaDownloader, YtDlpExtractor},
    error::{exit_codes, Result},
    output::{
        print_banner, print_info, print_run_summary, print_success, print_user_stats,
        print_warning,
    },
};

/// Local environment-definition file read before anything else.
const ENV_FILE: &str = ".env";

#[tokio::main]
async fn main() -> ExitCode {
    // Credentials must be in the environment before clap reads `env = ...` args.
    let _ = dotenvy::from_filename(ENV_FILE);

    let (args, username) = match resolve_invocation(parse_args(std::env::args_os())) {
        Invocation::Run { args, username } => (args, username),
        Invocation::Exit {
            code,
            stdout,
            error,
        } => {
            if let Some(text) = stdout {
                println!("{}", text.trim_end());
            }
            if let Some(message) = error {
                init_logging(false);
                tracing::error!("{}", message);
            }
            return ExitCode::from(code as u8);
        }
    };

    init_logging(args.debug);

    match run(args, username).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::from(exit_codes::FAILURE as u8)
        }
    }
}

/// Set up logging; `RUST_LOG` takes precedence over `--debug`.
fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(args: Args, username: String) -> Result<()> {
    // Load configuration
    let mut config = Config::load_or_default(&args.config)?;
    args.merge_into_config(&mut config);
    validate_config(&config)?;

    let count = args.effective_count(&config);

    print_banner();
    print_run_summary(
        &username,
        count,
        &config.options.output_directory.display().to_string(),
    );

    let extractor = YtDlpExtractor::new(config.options.yt_dlp_path.clone());
    if !extractor.is_available().await {
        print_warning("yt-dlp is not available; video downloads will fail");
    }

    let api = TwitterApi::new(config.api.clone())?;
    let downloader = MediaDownloader::new(api.http_client().clone(), Box::new(extractor));

    print_info(&format!("Fetching media for @{}...", username));
    let mut state = DownloadState::new(username);
    download_user_media(&api, &downloader, &config, &mut state, count).await?;

    print_user_stats(&state);
    print_success("Done");

    Ok(())
}
