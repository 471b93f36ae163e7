//! # Action Orchestration
//!
//! Wires the steps of a run together: configuration check, validation, issue
//! creation and reporting the issue id to the workflow.

use std::io::Write;

use mantis_client::{IssueId, MantisClient};
use tracing::{debug, info};

use crate::consts::ISSUE_ID_OUTPUT;
use crate::error::ActionError;
use crate::inputs::RawParameters;
use crate::output;
use crate::validate::validate;

/// Ensure the inputs needed to reach the service are present.
///
/// Plain emptiness check; whitespace is left to the validator.
pub fn check_configuration(params: &RawParameters) -> Result<(), ActionError> {
  if params.url.is_empty() || params.api_key.is_empty() || params.project.is_empty() {
    return Err(ActionError::Configuration);
  }
  Ok(())
}

/// Create one issue from `params` and write its id as a workflow output to
/// `out`.
///
/// Nothing is written to `out` unless the issue was created.
pub async fn run<W: Write>(params: &RawParameters, out: &mut W) -> Result<IssueId, ActionError> {
  debug!("Action inputs: {:?}", params);

  check_configuration(params)?;
  let request = validate(params)?;

  let client = MantisClient::new(&params.url, &params.api_key);
  let response = client.create_issue(&request).await?;

  let id = response.issue.id;
  output::set_output(out, ISSUE_ID_OUTPUT, &id)?;
  info!("Created issue {}", id);

  Ok(id)
}
