//! # MantisHub Create-Issue Action Entry Point
//!
//! Runs one create-issue action and maps its outcome to the process exit code.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mantis_action::cli::Cli;
use mantis_action::consts::ENV_RUNNER_DEBUG;
use mantis_action::output::print_error;
use mantis_action::{ActionError, RawParameters};
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
  let cmd = Cli::parse();

  // Set up tracing based on verbosity level
  let runner_debug = std::env::var(ENV_RUNNER_DEBUG).is_ok_and(|value| value == "1");
  let level = cmd.log_level(runner_debug);

  // Logs go to stderr; stdout is reserved for workflow commands
  tracing_subscriber::registry()
    .with(fmt::layer().with_writer(io::stderr))
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  match execute() {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      report(&err);
      ExitCode::FAILURE
    }
  }
}

fn execute() -> Result<()> {
  let params = RawParameters::from_env();

  let runtime = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;

  let mut stdout = io::stdout().lock();
  runtime.block_on(mantis_action::run(&params, &mut stdout))?;
  Ok(())
}

fn report(err: &anyhow::Error) {
  // The alternate form includes every source, down to the transport cause
  print_error(&format!("{err:#}"));

  if let Some(body) = err.downcast_ref::<ActionError>().and_then(ActionError::response_body) {
    print_error(&format!("Error response data: {body}"));
  }
}
