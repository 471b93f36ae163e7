//! # MantisHub HTTP Client
//!
//! Performs single requests against the MantisHub REST API using a static API
//! token, returning the raw response body on success.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use serde::Serialize;
use tracing::{debug, warn};

use crate::consts;
use crate::error::ClientError;

/// Represents a MantisHub API client
pub struct MantisClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) api_key: String,
}

impl MantisClient {
  /// Create a new MantisHub client
  pub fn new(base_url: &str, api_key: &str) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.to_string(),
      api_key: api_key.to_string(),
    }
  }

  /// Perform exactly one request and return the response body text.
  ///
  /// The API key is sent verbatim as the `Authorization` header. Responses
  /// outside the 2xx range are returned as [`ClientError::Status`] with the
  /// body attached.
  pub async fn request<B>(&self, method: Method, url: &str, body: Option<&B>) -> Result<String, ClientError>
  where
    B: Serialize + ?Sized,
  {
    if !matches!(method, Method::GET | Method::POST | Method::PATCH) {
      return Err(ClientError::UnsupportedMethod(method));
    }

    debug!("{} {}", method, url);

    let mut request = self
      .client
      .request(method, url)
      .header(AUTHORIZATION, self.api_key.as_str())
      .header(CONTENT_TYPE, consts::JSON_CONTENT_TYPE)
      .header(USER_AGENT, consts::USER_AGENT);

    if let Some(body) = body {
      request = request.json(body);
    }

    let response = request.send().await.map_err(ClientError::Transport)?;
    let status = response.status();
    let text = response.text().await.map_err(ClientError::Transport)?;

    if status.is_success() {
      debug!("Received HTTP {} ({} bytes)", status.as_u16(), text.len());
      Ok(text)
    } else {
      warn!("Request failed with status code {}: {}", status.as_u16(), text);
      Err(ClientError::Status {
        status: status.as_u16(),
        body: text,
      })
    }
  }
}
