//! HTTP client wrapper for the TickTick Open API.

use std::fmt;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Error, Result};
use crate::models::{Project, ProjectData, Task};

/// Base URL for the TickTick Open API v1.
const BASE_URL: &str = "https://api.ticktick.com/open/v1";

/// Read-only client for the TickTick Open API.
///
/// Holds an already-obtained access token; obtaining and refreshing tokens
/// is the caller's concern.
#[derive(Clone)]
pub struct TickTickClient {
    token: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl TickTickClient {
    /// Creates a new client with the given access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            http_client: reqwest::Client::new(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Creates a new client with a custom base URL (for testing).
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Returns the access token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches all projects visible to the account.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.get("/project").await
    }

    /// Fetches a single project by id.
    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        self.get(&format!("/project/{project_id}")).await
    }

    /// Fetches a project together with its task list.
    pub async fn get_project_data(&self, project_id: &str) -> Result<ProjectData> {
        self.get(&format!("/project/{project_id}/data")).await
    }

    /// Fetches a project's tasks, in the service's order.
    pub async fn list_tasks(&self, project_id: &str) -> Result<Vec<Task>> {
        Ok(self.get_project_data(project_id).await?.tasks)
    }

    /// Fetches a single task by project id and task id.
    pub async fn get_task(&self, project_id: &str, task_id: &str) -> Result<Task> {
        self.get(&format!("/project/{project_id}/task/{task_id}"))
            .await
    }

    /// Performs a GET request to the given endpoint.
    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, "GET");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handles the HTTP response, converting error statuses to our error types.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.json::<T>().await?;
            return Ok(body);
        }

        Err(self.parse_error_response(response).await)
    }

    /// Parses an error response into our error types.
    async fn parse_error_response(&self, response: reqwest::Response) -> Error {
        let status = response.status();
        let status_code = status.as_u16();

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        let message = response.text().await.unwrap_or_default();

        let api_error = match status_code {
            401 | 403 => ApiError::Auth {
                message: if message.is_empty() {
                    "authentication failed".to_string()
                } else {
                    message
                },
            },
            404 => ApiError::NotFound {
                resource: "resource".to_string(),
                id: "unknown".to_string(),
            },
            429 => ApiError::RateLimit { retry_after },
            _ => ApiError::Http {
                status: status_code,
                message: if message.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("unknown error")
                        .to_string()
                } else {
                    message
                },
            },
        };

        Error::Api(api_error)
    }
}

impl fmt::Debug for TickTickClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickTickClient")
            .field("token", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Test: the client stores the token for later use
    #[test]
    fn test_client_stores_token() {
        let client = TickTickClient::new("my-secret-token");
        assert_eq!(client.token(), "my-secret-token");
    }

    // Test: the client uses the default base URL
    #[test]
    fn test_client_default_base_url() {
        let client = TickTickClient::new("test-token");
        assert_eq!(client.base_url(), BASE_URL);
    }

    // Test: the token must be redacted in debug output
    #[test]
    fn test_client_debug_redacts_token() {
        let client = TickTickClient::new("test-token");
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("test-token"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_list_projects_deserializes_and_authenticates() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"[
                    {"id": "p1", "name": "Inbox"},
                    {"id": "p2", "name": "Work", "closed": true}
                ]"#,
                "application/json",
            ))
            .expect(1)
            .mount(&server)
            .await;

        let client = TickTickClient::with_base_url("test-token", server.uri());
        let projects = client.list_projects().await.unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Inbox");
        assert!(projects[1].is_closed());
    }

    #[tokio::test]
    async fn test_get_project_data_includes_tasks() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/p1/data"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(
                r#"{
                    "project": {"id": "p1", "name": "Work"},
                    "tasks": [
                        {"id": "t1", "title": "First", "dueDate": "2019-11-14T03:00:00+0000"}
                    ]
                }"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let client = TickTickClient::with_base_url("test-token", server.uri());
        let data = client.get_project_data("p1").await.unwrap();

        assert_eq!(data.project.name, "Work");
        assert_eq!(data.tasks.len(), 1);
        assert_eq!(
            data.tasks[0].due_date.as_deref(),
            Some("2019-11-14T03:00:00+0000")
        );
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_auth_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project"))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
            .mount(&server)
            .await;

        let client = TickTickClient::with_base_url("stale-token", server.uri());
        let error = client.list_projects().await.unwrap_err();

        assert!(error.is_auth());
        assert!(error.to_string().contains("token expired"));
    }

    #[tokio::test]
    async fn test_not_found_maps_to_not_found_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project/missing/task/t9"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = TickTickClient::with_base_url("test-token", server.uri());
        let error = client.get_task("missing", "t9").await.unwrap_err();

        assert!(matches!(
            error,
            Error::Api(ApiError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_rate_limit_carries_retry_after() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/project"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
            .mount(&server)
            .await;

        let client = TickTickClient::with_base_url("test-token", server.uri());
        let error = client.list_projects().await.unwrap_err();

        assert!(matches!(
            error,
            Error::Api(ApiError::RateLimit {
                retry_after: Some(30)
            })
        ));
    }
}
