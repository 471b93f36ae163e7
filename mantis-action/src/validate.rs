//! # Input Validation
//!
//! Turns the raw workflow inputs into a MantisHub issue request. Required
//! fields are checked in a fixed order and the first failure is returned.

use mantis_client::{IssueRequest, ValidationError};
use tracing::debug;

use crate::inputs::RawParameters;

/// Validate the issue fields of `params` and build the request body.
///
/// `summary`, `description`, `category` and `project` must be non-empty after
/// trimming. `url` and `api_key` are not looked at here.
pub fn validate(params: &RawParameters) -> Result<IssueRequest, ValidationError> {
  let request = IssueRequest::new(&params.summary, &params.description, &params.category, &params.project)?;

  debug!(
    "Validated issue '{}' for project '{}' in category '{}'",
    request.summary(),
    request.project().name(),
    request.category().name()
  );

  Ok(request)
}
