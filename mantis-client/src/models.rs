use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A `{"name": ...}` reference, the shape MantisHub expects for projects and
/// categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedRef {
  name: String,
}

impl NamedRef {
  /// Wrap a flat name into a reference object
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }

  pub fn name(&self) -> &str {
    &self.name
  }
}

/// Payload for `POST /api/rest/issues`
///
/// Every string is trimmed and non-empty; the only way to obtain a value is
/// through [`IssueRequest::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueRequest {
  summary: String,
  description: String,
  category: NamedRef,
  project: NamedRef,
}

impl IssueRequest {
  /// Validate flat issue fields and build the request body.
  ///
  /// Fields are checked in the order summary, description, category, project
  /// and the first empty (or whitespace-only) one is reported.
  pub fn new(summary: &str, description: &str, category: &str, project: &str) -> Result<Self, ValidationError> {
    let summary = required("summary", summary)?;
    let description = required("description", description)?;
    let category = required("category", category)?;
    let project = required("project", project)?;

    Ok(Self {
      summary,
      description,
      category: NamedRef::new(category),
      project: NamedRef::new(project),
    })
  }

  pub fn summary(&self) -> &str {
    &self.summary
  }

  pub fn description(&self) -> &str {
    &self.description
  }

  pub const fn category(&self) -> &NamedRef {
    &self.category
  }

  pub const fn project(&self) -> &NamedRef {
    &self.project
  }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ValidationError::Missing { field });
  }
  Ok(trimmed.to_string())
}

/// Identifier of an issue; MantisHub returns a number but strings are passed
/// through untouched
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum IssueId {
  Number(i64),
  /// A JSON number written with a fraction or exponent, e.g. `42.0`
  Float(f64),
  Text(String),
}

impl fmt::Display for IssueId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      IssueId::Number(id) => write!(f, "{id}"),
      // Integral floats print without a fraction: 42.0 -> "42"
      IssueId::Float(id) if id.fract() == 0.0 && id.abs() < 1e15 => write!(f, "{id:.0}"),
      IssueId::Float(id) => write!(f, "{id}"),
      IssueId::Text(id) => f.write_str(id),
    }
  }
}

/// The `issue` object of a creation response
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
  pub id: IssueId,
}

#[derive(Deserialize)]
struct IssueEnvelope {
  issue: CreatedIssue,
}

/// Decoded response of an issue creation call
#[derive(Debug, Clone)]
pub struct IssueResponse {
  pub issue: CreatedIssue,
  /// The complete JSON document as returned by the service
  pub raw: serde_json::Value,
}

impl IssueResponse {
  /// Decode a creation response, requiring only `issue.id`
  pub fn from_value(raw: serde_json::Value) -> serde_json::Result<Self> {
    let envelope = IssueEnvelope::deserialize(&raw)?;
    Ok(Self {
      issue: envelope.issue,
      raw,
    })
  }
}
