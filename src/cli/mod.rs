//! Command-line interface.

pub mod args;
pub mod invocation;

pub use args::{parse_args, ArgsOutcome, Args};
pub use invocation::{resolve_invocation, Invocation, USAGE};
