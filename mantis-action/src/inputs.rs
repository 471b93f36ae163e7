//! # Workflow Inputs
//!
//! Loads the raw action inputs from the process environment. No validation
//! happens here; absent variables become empty strings.

use std::env;
use std::fmt;

use crate::consts::{
  ENV_INPUT_API_KEY, ENV_INPUT_CATEGORY, ENV_INPUT_DESCRIPTION, ENV_INPUT_PROJECT, ENV_INPUT_SUMMARY, ENV_INPUT_URL,
};

/// The action inputs exactly as the workflow supplied them
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawParameters {
  pub url: String,
  pub api_key: String,
  pub project: String,
  pub summary: String,
  pub description: String,
  pub category: String,
}

impl RawParameters {
  /// Read the inputs from the process environment
  pub fn from_env() -> Self {
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Read the inputs through an arbitrary lookup, mapping `None` to `""`
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |name: &str| lookup(name).unwrap_or_default();
    Self {
      url: read(ENV_INPUT_URL),
      api_key: read(ENV_INPUT_API_KEY),
      project: read(ENV_INPUT_PROJECT),
      summary: read(ENV_INPUT_SUMMARY),
      description: read(ENV_INPUT_DESCRIPTION),
      category: read(ENV_INPUT_CATEGORY),
    }
  }
}

// The API key must never reach the logs.
impl fmt::Debug for RawParameters {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let api_key = if self.api_key.is_empty() { "" } else { "***" };
    f.debug_struct("RawParameters")
      .field("url", &self.url)
      .field("api_key", &api_key)
      .field("project", &self.project)
      .field("summary", &self.summary)
      .field("description", &self.description)
      .field("category", &self.category)
      .finish()
  }
}
