//! # Command Line Interface
//!
//! The action is configured through workflow inputs; the command line only
//! controls logging.

use clap::{ArgAction, Parser};

/// Long version string including the commit the binary was built from
pub const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Top-level CLI command for the create-issue action
#[derive(Parser, Debug)]
#[command(name = "mantis-action")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "Create a MantisHub issue from workflow inputs")]
#[command(
  long_about = "Creates a MantisHub issue from the INPUT_URL, INPUT_API-KEY, INPUT_PROJECT,\n\
        INPUT_SUMMARY, INPUT_DESCRIPTION and INPUT_CATEGORY environment variables and\n\
        reports the new issue id as the 'issue-id' workflow output."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = LONG_VERSION)]
#[command(max_term_width = 120)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show debug level messages\n\
             -vv: Show trace level messages"
  )]
  pub verbose: u8,
}

impl Cli {
  /// Log level for the given verbosity, raised to DEBUG when the runner has
  /// step debugging enabled
  pub const fn log_level(&self, runner_debug: bool) -> tracing::Level {
    match (self.verbose, runner_debug) {
      (0, false) => tracing::Level::INFO,
      (0, true) | (1, _) => tracing::Level::DEBUG,
      _ => tracing::Level::TRACE,
    }
  }
}
