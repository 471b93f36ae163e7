//! Error types for the create-issue action.

use mantis_client::{ClientError, ValidationError};
use thiserror::Error;

/// Every way a run of the action can fail; all of them are terminal
#[derive(Error, Debug)]
pub enum ActionError {
  /// `url`, `api-key` or `project` was not supplied
  #[error("Project name, url and api-key inputs are required.")]
  Configuration,

  #[error(transparent)]
  Validation(#[from] ValidationError),

  #[error("Failed to create issue")]
  Request(#[from] ClientError),

  /// The issue was created but the workflow output could not be written
  #[error("Failed to write workflow output")]
  Output(#[from] std::io::Error),
}

impl ActionError {
  /// Raw response body returned by the service, when the failure carries one
  pub fn response_body(&self) -> Option<&str> {
    match self {
      ActionError::Request(error) => error.response_body(),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_request_error_chain_keeps_cause_once() {
    let cause = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    let cause_message = cause.to_string();
    let error = anyhow::Error::from(ActionError::Request(ClientError::Decode(cause)));

    let rendered = format!("{error:#}");

    assert_eq!(
      rendered,
      format!("Failed to create issue: Failed to parse MantisHub response: {cause_message}")
    );
    assert_eq!(rendered.matches(&cause_message).count(), 1);
  }

  #[test]
  fn test_response_body_only_for_status_errors() {
    let status = ActionError::Request(ClientError::Status {
      status: 422,
      body: "rejected".to_string(),
    });

    assert_eq!(status.response_body(), Some("rejected"));
    assert_eq!(ActionError::Configuration.response_body(), None);
  }
}
