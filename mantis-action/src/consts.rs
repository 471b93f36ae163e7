//! Constants for the create-issue action
//!
//! Workflow input variable names and the names of the values reported back to
//! the workflow.

/// Base URL of the MantisHub instance
pub const ENV_INPUT_URL: &str = "INPUT_URL";

/// API token sent as the `Authorization` header
pub const ENV_INPUT_API_KEY: &str = "INPUT_API-KEY";

/// Project name
pub const ENV_INPUT_PROJECT: &str = "INPUT_PROJECT";

/// Issue summary
pub const ENV_INPUT_SUMMARY: &str = "INPUT_SUMMARY";

/// Issue description
pub const ENV_INPUT_DESCRIPTION: &str = "INPUT_DESCRIPTION";

/// Category name
pub const ENV_INPUT_CATEGORY: &str = "INPUT_CATEGORY";

/// Every workflow input read by the action
pub const INPUT_VARS: [&str; 6] = [
  ENV_INPUT_URL,
  ENV_INPUT_API_KEY,
  ENV_INPUT_PROJECT,
  ENV_INPUT_SUMMARY,
  ENV_INPUT_DESCRIPTION,
  ENV_INPUT_CATEGORY,
];

/// Set to `1` by the workflow runner when step debug logging is enabled
pub const ENV_RUNNER_DEBUG: &str = "RUNNER_DEBUG";

/// Name of the workflow output carrying the created issue id
pub const ISSUE_ID_OUTPUT: &str = "issue-id";
