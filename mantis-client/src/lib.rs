//! # MantisHub API Client
//!
//! Minimal MantisHub REST API integration used by the create-issue workflow
//! action: a single-request HTTP client authenticated with a static API token
//! and the issue creation endpoint built on top of it.

mod client;
pub mod consts;
mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::MantisClient;
pub use error::{ClientError, ValidationError};
// Re-export models
pub use models::{CreatedIssue, IssueId, IssueRequest, IssueResponse, NamedRef};
