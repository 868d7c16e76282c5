//! Work item REST client.

use std::time::Duration;

use anyhow::Context;
use reqwest::blocking::Client;
use serde::Serialize;
use serde_json::Value;

use crate::error::{AuditError, Result};

use super::{TicketRequest, TicketTarget};

/// Work item type created for upgrade requests.
pub const WORK_ITEM_TYPE: &str = "User Story";

/// API version sent with every request.
pub const API_VERSION: &str = "6.0";

/// Host suffix of the hosted work-tracking service.
const SERVICE_HOST: &str = "visualstudio.com";

/// One JSON Patch operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchOperation {
    pub op: &'static str,
    pub path: &'static str,
    pub value: String,
}

/// JSON Patch document setting the title and description fields.
pub fn patch_document(request: &TicketRequest) -> Vec<PatchOperation> {
    vec![
        PatchOperation {
            op: "add",
            path: "/fields/System.Title",
            value: request.title.clone(),
        },
        PatchOperation {
            op: "add",
            path: "/fields/System.Description",
            value: request.description.clone(),
        },
    ]
}

/// Creates work items over HTTP.
pub struct WorkItemClient {
    client: Client,
    base_url: Option<String>,
    timeout: Duration,
}

impl WorkItemClient {
    /// Client for the hosted service (`https://<org>.visualstudio.com`).
    pub fn new() -> Self {
        Self::build(None, Duration::from_secs(30))
    }

    /// Client that sends every request to `base_url` instead of the
    /// organization's hosted URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::build(Some(base_url.into()), Duration::from_secs(30))
    }

    fn build(base_url: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!("dotnet-audit/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.map(|url| url.trim_end_matches('/').to_string()),
            timeout,
        }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Creation endpoint for `target`.
    pub fn endpoint(&self, target: &TicketTarget) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => format!("https://{}.{}", target.org(), SERVICE_HOST),
        };
        format!(
            "{}/{}/_apis/wit/workitems/${}?api-version={}",
            base,
            target.project(),
            WORK_ITEM_TYPE.replace(' ', "%20"),
            API_VERSION
        )
    }

    /// Create one work item and return the id the service assigned.
    pub fn create(&self, target: &TicketTarget, request: &TicketRequest) -> Result<u64> {
        let url = self.endpoint(target);
        tracing::info!("Creating work item in {}/{}", target.org(), target.project());
        tracing::debug!("POST {}", url);

        let body = serde_json::to_string(&patch_document(request))
            .context("Failed to encode work item patch")?;

        let response = self
            .client
            .post(&url)
            .basic_auth("", Some(target.credential()))
            .header("Content-Type", "application/json-patch+json")
            .body(body)
            .send()
            .map_err(|e| AuditError::TicketRequest {
                message: format!("request to {} failed: {}", url, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(AuditError::TicketRequest {
                message: format!("HTTP {}: {}", status, detail.trim()),
            });
        }

        let json: Value = response.json().map_err(|e| AuditError::TicketRequest {
            message: format!("invalid response body: {}", e),
        })?;

        json.get("id")
            .and_then(Value::as_u64)
            .ok_or_else(|| AuditError::TicketRequest {
                message: "response did not contain a work item id".to_string(),
            })
    }
}

impl Default for WorkItemClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn target() -> TicketTarget {
        TicketTarget::new("contoso", "Platform", "secret-pat").unwrap()
    }

    fn request() -> TicketRequest {
        TicketRequest {
            title: "Upgrade .NET on HOST1 (EOL installed: 6.0.28)".to_string(),
            description: "details".to_string(),
        }
    }

    #[test]
    fn hosted_endpoint_uses_org_subdomain() {
        let client = WorkItemClient::new();
        assert_eq!(
            client.endpoint(&target()),
            "https://contoso.visualstudio.com/Platform/_apis/wit/workitems/$User%20Story?api-version=6.0"
        );
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let client = WorkItemClient::with_base_url("http://localhost:8080/");
        assert_eq!(
            client.endpoint(&target()),
            "http://localhost:8080/Platform/_apis/wit/workitems/$User%20Story?api-version=6.0"
        );
    }

    #[test]
    fn patch_document_sets_title_and_description() {
        let doc = serde_json::to_value(patch_document(&request())).unwrap();
        assert_eq!(
            doc,
            json!([
                {"op": "add", "path": "/fields/System.Title", "value": "Upgrade .NET on HOST1 (EOL installed: 6.0.28)"},
                {"op": "add", "path": "/fields/System.Description", "value": "details"}
            ])
        );
    }

    #[test]
    fn create_posts_patch_and_returns_id() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .query_param("api-version", "6.0")
                // base64(":secret-pat")
                .header("authorization", "Basic OnNlY3JldC1wYXQ=")
                .header("content-type", "application/json-patch+json")
                .json_body(json!([
                    {"op": "add", "path": "/fields/System.Title", "value": "Upgrade .NET on HOST1 (EOL installed: 6.0.28)"},
                    {"op": "add", "path": "/fields/System.Description", "value": "details"}
                ]));
            then.status(200).json_body(json!({"id": 4211, "rev": 1}));
        });

        let client = WorkItemClient::with_base_url(server.base_url());
        let id = client.create(&target(), &request()).unwrap();

        assert_eq!(id, 4211);
        mock.assert();
    }

    #[test]
    fn create_surfaces_http_errors() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST);
            then.status(401).body("unauthorized");
        });

        let client = WorkItemClient::with_base_url(server.base_url());
        let err = client.create(&target(), &request()).unwrap_err();

        assert!(matches!(err, AuditError::TicketRequest { .. }));
        assert!(err.to_string().contains("401"));
        mock.assert_calls(1);
    }

    #[test]
    fn create_rejects_response_without_id() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200).json_body(json!({"message": "ok"}));
        });

        let client = WorkItemClient::with_base_url(server.base_url());
        let err = client.create(&target(), &request()).unwrap_err();

        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn create_rejects_non_json_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200).body("<html>sign in</html>");
        });

        let client = WorkItemClient::with_base_url(server.base_url());
        assert!(client.create(&target(), &request()).is_err());
    }

    #[test]
    fn unreachable_service_is_an_error() {
        let client = WorkItemClient::with_base_url("http://127.0.0.1:1");
        assert!(client.create(&target(), &request()).is_err());
    }
}
