//! ADK Session Client - Implementation of SessionBackend over the ADK HTTP API.
//!
//! # Endpoints
//!
//! - `GET {base_url}/apps/{app}/users/{user}/sessions` - session listing
//! - `GET {base_url}/apps/{app}/users/{user}/sessions/{session}` - session with events
//!
//! ADK answers the listing with a bare JSON array; proxies in front of it
//! may wrap that in a `{ "sessions": [...] }` envelope. Both are accepted.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AdkClientConfig::new("http://localhost:8000", "my_agent")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let backend = AdkSessionClient::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, Secret};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use crate::config::AdkConfig;
use crate::domain::foundation::{SessionId, UserId};
use crate::ports::{BackendError, ListedSessions, SessionBackend, SessionDetail};

/// Configuration for the ADK session client.
#[derive(Debug, Clone)]
pub struct AdkClientConfig {
    /// Optional bearer token.
    api_key: Option<Secret<String>>,
    /// Base URL of the ADK API server.
    pub base_url: String,
    /// Agent application whose sessions are read.
    pub app_name: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl AdkClientConfig {
    pub fn new(base_url: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            api_key: None,
            base_url: base_url.into(),
            app_name: app_name.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&AdkConfig> for AdkClientConfig {
    fn from(config: &AdkConfig) -> Self {
        let mut client_config = AdkClientConfig::new(&config.base_url, &config.app_name)
            .with_timeout(config.timeout());
        if let Some(key) = config.api_key.as_ref() {
            client_config = client_config.with_api_key(key.expose_secret().clone());
        }
        client_config
    }
}

/// HTTP client for the ADK session API.
pub struct AdkSessionClient {
    config: AdkClientConfig,
    client: Client,
}

impl AdkSessionClient {
    /// Creates a client, validating the base URL up front.
    pub fn new(config: AdkClientConfig) -> Result<Self, BackendError> {
        Url::parse(&config.base_url)
            .map_err(|e| BackendError::network(format!("Invalid ADK base URL: {}", e)))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BackendError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds `{base}/apps/{app}/users/{user}/sessions[/{session}]` with
    /// every segment percent-encoded.
    fn sessions_url(
        &self,
        user_id: &UserId,
        session_id: Option<&SessionId>,
    ) -> Result<Url, BackendError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| BackendError::network(format!("Invalid ADK base URL: {}", e)))?;

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| BackendError::network("ADK base URL cannot be a base"))?;
            segments.pop_if_empty().extend([
                "apps",
                self.config.app_name.as_str(),
                "users",
                user_id.as_str(),
                "sessions",
            ]);
            if let Some(session_id) = session_id {
                segments.push(session_id.as_str());
            }
        }

        Ok(url)
    }

    /// GETs a JSON document. A 404 or an empty body is `None`.
    async fn get_json(&self, url: Url) -> Result<Option<Value>, BackendError> {
        let mut request = self.client.get(url.clone());
        if let Some(key) = self.config.api_key.as_ref() {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                BackendError::network(format!("Connection failed: {}", e))
            } else {
                BackendError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(%url, "ADK resource not found");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| BackendError::network(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        if body.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&body)
            .map(Some)
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}

#[async_trait]
impl SessionBackend for AdkSessionClient {
    async fn list_user_sessions(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ListedSessions>, BackendError> {
        let url = self.sessions_url(user_id, None)?;
        debug!(%url, "Listing ADK sessions");

        let Some(payload) = self.get_json(url).await? else {
            return Ok(None);
        };

        let envelope = match payload {
            Value::Array(records) => json!({ "sessions": records }),
            other => other,
        };

        ListedSessions::from_envelope(&envelope).map(Some)
    }

    async fn get_session_with_events(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<Option<SessionDetail>, BackendError> {
        let url = self.sessions_url(user_id, Some(session_id))?;
        debug!(%url, "Fetching ADK session with events");

        Ok(self
            .get_json(url)
            .await?
            .map(|payload| SessionDetail::from_payload(&payload)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> AdkSessionClient {
        AdkSessionClient::new(AdkClientConfig::new(server.uri(), "agent")).unwrap()
    }

    fn user() -> UserId {
        UserId::new("u1")
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = AdkSessionClient::new(AdkClientConfig::new("not a url", "agent"));
        assert!(result.is_err());
    }

    #[test]
    fn sessions_url_encodes_segments() {
        let client =
            AdkSessionClient::new(AdkClientConfig::new("http://adk.local/api/", "agent")).unwrap();
        let user = UserId::new("a b/c");
        let session = SessionId::new("s1");

        let url = client.sessions_url(&user, Some(&session)).unwrap();

        assert_eq!(
            url.as_str(),
            "http://adk.local/api/apps/agent/users/a%20b%2Fc/sessions/s1"
        );
    }

    #[tokio::test]
    async fn lists_bare_array_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps/agent/users/u1/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": "s1", "appName": "agent", "userId": "u1", "lastUpdateTime": 1704067200.0 }
            ])))
            .mount(&server)
            .await;

        let listed = client_for(&server).list_user_sessions(&user()).await.unwrap();

        let sessions = match listed {
            Some(ListedSessions::Sessions(sessions)) => sessions,
            other => panic!("expected sessions, got {other:?}"),
        };
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].app_name, "agent");
    }

    #[tokio::test]
    async fn lists_enveloped_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps/agent/users/u1/sessions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "sessions": "oops" })),
            )
            .mount(&server)
            .await;

        let listed = client_for(&server).list_user_sessions(&user()).await.unwrap();

        assert_eq!(listed, Some(ListedSessions::Malformed { found: "string" }));
    }

    #[tokio::test]
    async fn not_found_listing_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let listed = client_for(&server).list_user_sessions(&user()).await.unwrap();

        assert_eq!(listed, None);
    }

    #[tokio::test]
    async fn server_error_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_user_sessions(&user())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BackendError::Status {
                status: 503,
                body: "down".to_string()
            }
        );
    }

    #[tokio::test]
    async fn invalid_json_maps_to_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .list_user_sessions(&user())
            .await
            .unwrap_err();

        assert!(matches!(err, BackendError::Parse(_)));
    }

    #[tokio::test]
    async fn session_detail_counts_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/apps/agent/users/u1/sessions/s1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "s1",
                "events": [{ "author": "user" }, { "author": "agent" }]
            })))
            .mount(&server)
            .await;

        let detail = client_for(&server)
            .get_session_with_events(&user(), &SessionId::new("s1"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(detail.message_count(), 2);
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("authorization", "Bearer secret-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = AdkSessionClient::new(
            AdkClientConfig::new(server.uri(), "agent").with_api_key("secret-token"),
        )
        .unwrap();

        let listed = client.list_user_sessions(&user()).await.unwrap();

        assert_eq!(listed, Some(ListedSessions::Sessions(vec![])));
    }

    #[tokio::test]
    async fn timeout_maps_to_timeout_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = AdkSessionClient::new(
            AdkClientConfig::new(server.uri(), "agent").with_timeout(Duration::from_millis(50)),
        )
        .unwrap();

        let err = client.list_user_sessions(&user()).await.unwrap_err();

        assert!(matches!(err, BackendError::Timeout { .. }));
    }
}
