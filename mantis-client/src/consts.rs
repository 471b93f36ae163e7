//! Constants for the mantis-client crate.

/// User-Agent header value for the MantisHub API client
pub const USER_AGENT: &str = concat!("mantis-action/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Path of the issue collection, appended to the configured base URL
pub const ISSUES_PATH: &str = "/api/rest/issues";

/// Media type of every request payload
pub const JSON_CONTENT_TYPE: &str = "application/json";
