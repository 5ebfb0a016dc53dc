//! What the entry point does with the command line before any work starts.

use crate::cli::args::{Args, ArgsOutcome};
use crate::config::parse_username;
use crate::error::exit_codes;

pub const USAGE: &str = "Usage: tweet-media-dl --username <username> [--count <count>]\n       tweet-media-dl -u <username> [-c <count>]";

#[derive(Debug)]
pub enum Invocation {
    /// Go ahead with a normalised username.
    Run { args: Args, username: String },
    /// Stop without touching the network.
    Exit {
        code: i32,
        /// Printed on stdout.
        stdout: Option<String>,
        /// Logged as an error.
        error: Option<String>,
    },
}

impl Invocation {
    fn exit(code: i32, stdout: Option<String>, error: Option<String>) -> Self {
        Self::Exit {
            code,
            stdout,
            error,
        }
    }
}

/// Turn a parsed command line into a run or an early exit.
///
/// Help and version exit 0; usage errors, a non-integer count and a
/// malformed username exit 1.
pub fn resolve_invocation(outcome: ArgsOutcome) -> Invocation {
    match outcome {
        ArgsOutcome::Run(args) => match parse_username(&args.username) {
            Ok(username) => Invocation::Run { args, username },
            Err(e) => Invocation::exit(
                exit_codes::FAILURE,
                Some(format!("{}\n\n{}", e, USAGE)),
                None,
            ),
        },
        ArgsOutcome::Info(text) => Invocation::exit(exit_codes::SUCCESS, Some(text), None),
        ArgsOutcome::Usage(text) => Invocation::exit(exit_codes::FAILURE, Some(text), None),
        ArgsOutcome::InvalidCount(text) => Invocation::exit(
            exit_codes::FAILURE,
            None,
            Some(format!("Count must be an integer: {}", text.trim())),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse_args;

    fn resolve(argv: &[&str]) -> Invocation {
        resolve_invocation(parse_args(argv))
    }

    #[test]
    fn test_valid_username_runs() {
        match resolve(&["tweet-media-dl", "-u", "@alice", "-c", "2"]) {
            Invocation::Run { args, username } => {
                assert_eq!(username, "alice");
                assert_eq!(args.count, Some(2));
            }
            other => panic!("expected Run, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_username_prints_usage_and_fails() {
        match resolve(&["tweet-media-dl", "-u", "not a name!"]) {
            Invocation::Exit {
                code,
                stdout,
                error,
            } => {
                assert_eq!(code, exit_codes::FAILURE);
                assert!(stdout.unwrap().contains(USAGE));
                assert!(error.is_none());
            }
            other => panic!("expected Exit, got {:?}", other),
        }
    }

    #[test]
    fn test_help_exits_zero() {
        match resolve(&["tweet-media-dl", "--help"]) {
            Invocation::Exit { code, stdout, .. } => {
                assert_eq!(code, exit_codes::SUCCESS);
                assert!(stdout.unwrap().contains("--username"));
            }
            other => panic!("expected Exit, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_username_exits_one() {
        match resolve(&["tweet-media-dl", "-c", "3"]) {
            Invocation::Exit { code, stdout, .. } => {
                assert_eq!(code, exit_codes::FAILURE);
                assert!(stdout.is_some());
            }
            other => panic!("expected Exit, got {:?}", other),
        }
    }

    #[test]
    fn test_non_integer_count_is_logged() {
        match resolve(&["tweet-media-dl", "-u", "alice", "-c", "lots"]) {
            Invocation::Exit {
                code,
                stdout,
                error,
            } => {
                assert_eq!(code, exit_codes::FAILURE);
                assert!(stdout.is_none());
                assert!(error.unwrap().starts_with("Count must be an integer"));
            }
            other => panic!("expected Exit, got {:?}", other),
        }
    }
}
