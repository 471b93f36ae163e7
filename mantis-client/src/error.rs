//! Error types for the MantisHub client.

use reqwest::Method;
use thiserror::Error;

/// Failures raised while talking to the MantisHub REST API
#[derive(Error, Debug)]
pub enum ClientError {
  /// The request never produced a response (connection refused, DNS, TLS,
  /// body read failure, invalid header value)
  #[error("Request to MantisHub failed")]
  Transport(#[source] reqwest::Error),

  /// The service answered outside the 2xx range
  #[error("Request failed with status code {status}: {body}")]
  Status { status: u16, body: String },

  /// A 2xx response whose body is not the expected JSON document
  #[error("Failed to parse MantisHub response")]
  Decode(#[source] serde_json::Error),

  /// Only GET, POST and PATCH are issued by this client
  #[error("Unsupported HTTP method: {0}")]
  UnsupportedMethod(Method),
}

impl ClientError {
  /// The raw response body carried by an HTTP status failure, if any
  pub fn response_body(&self) -> Option<&str> {
    match self {
      ClientError::Status { body, .. } => Some(body),
      _ => None,
    }
  }
}

/// A required issue field was empty or whitespace-only
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
  #[error("The '{field}' parameter is required and must be a non-empty string.")]
  Missing { field: &'static str },
}

impl ValidationError {
  /// Name of the field that failed validation
  pub const fn field(&self) -> &'static str {
    match self {
      ValidationError::Missing { field } => field,
    }
  }
}
