//! End-to-end runs of the action library with inputs read from the process
//! environment.

use anyhow::Result;
use mantis_action::consts::INPUT_VARS;
use mantis_action::{ActionError, RawParameters, run};
use mantis_client::IssueId;
use mantis_test_utils::EnvVarGuard;
use serial_test::serial;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn set_inputs(guard: &EnvVarGuard, url: &str) {
  guard.set("INPUT_URL", url);
  guard.set("INPUT_API-KEY", "KEY123");
  guard.set("INPUT_PROJECT", "Demo");
  guard.set("INPUT_SUMMARY", "Bug found");
  guard.set("INPUT_DESCRIPTION", "Steps to reproduce");
  guard.set("INPUT_CATEGORY", "General");
}

#[tokio::test]
#[serial]
async fn test_create_issue_from_environment() -> Result<()> {
  let mock_server = MockServer::start().await;

  Mock::given(method("POST"))
    .and(path("/api/rest/issues"))
    .and(header("Authorization", "KEY123"))
    .and(body_json(serde_json::json!({
        "summary": "Bug found",
        "description": "Steps to reproduce",
        "category": { "name": "General" },
        "project": { "name": "Demo" }
    })))
    .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
        "issue": {
            "id": 42,
            "summary": "Bug found",
            "project": { "id": 3, "name": "Demo" },
            "category": { "id": 1, "name": "General" }
        }
    })))
    .expect(1)
    .mount(&mock_server)
    .await;

  let params = {
    let guard = EnvVarGuard::new(&INPUT_VARS);
    set_inputs(&guard, &mock_server.uri());
    RawParameters::from_env()
  };

  let mut out = Vec::new();
  let id = run(&params, &mut out).await?;

  assert_eq!(id, IssueId::Number(42));
  assert_eq!(String::from_utf8(out)?, "::set-output name=issue-id::42\n");
  Ok(())
}

#[tokio::test]
#[serial]
async fn test_missing_environment_is_a_configuration_error() -> Result<()> {
  let mock_server = MockServer::start().await;
  Mock::given(any())
    .respond_with(ResponseTemplate::new(500))
    .expect(0)
    .mount(&mock_server)
    .await;

  let params = {
    let guard = EnvVarGuard::new(&INPUT_VARS);
    set_inputs(&guard, &mock_server.uri());
    guard.remove("INPUT_API-KEY");
    RawParameters::from_env()
  };

  let mut out = Vec::new();
  let error = run(&params, &mut out).await.unwrap_err();

  assert!(matches!(error, ActionError::Configuration));
  assert_eq!(error.to_string(), "Project name, url and api-key inputs are required.");
  assert!(out.is_empty());
  Ok(())
}

#[tokio::test]
#[serial]
async fn test_blank_category_names_category() -> Result<()> {
  let params = {
    let guard = EnvVarGuard::new(&INPUT_VARS);
    set_inputs(&guard, "https://example.mantishub.io");
    guard.set("INPUT_CATEGORY", "   ");
    RawParameters::from_env()
  };

  let mut out = Vec::new();
  let error = run(&params, &mut out).await.unwrap_err();

  assert_eq!(
    error.to_string(),
    "The 'category' parameter is required and must be a non-empty string."
  );
  assert!(out.is_empty());
  Ok(())
}
