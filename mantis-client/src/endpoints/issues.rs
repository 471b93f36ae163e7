//! # MantisHub Issue Endpoints
//!
//! Issue creation against `/api/rest/issues`.

use reqwest::Method;
use tracing::info;

use crate::client::MantisClient;
use crate::consts::ISSUES_PATH;
use crate::error::ClientError;
use crate::models::{IssueRequest, IssueResponse};

impl MantisClient {
  /// Endpoint of the issue collection for the configured base URL
  pub fn issues_endpoint(&self) -> String {
    format!("{}{}", self.base_url, ISSUES_PATH)
  }

  /// Create a new issue and return the decoded response
  pub async fn create_issue(&self, issue: &IssueRequest) -> Result<IssueResponse, ClientError> {
    let endpoint = self.issues_endpoint();
    info!("Making POST request to create new issue: {}", endpoint);

    let response = self.request(Method::POST, &endpoint, Some(issue)).await?;

    let body: serde_json::Value = serde_json::from_str(&response).map_err(ClientError::Decode)?;
    info!("Created issue response: {}", body);

    IssueResponse::from_value(body).map_err(ClientError::Decode)
  }
}
