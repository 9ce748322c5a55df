//! HTTP routes for session endpoints.

use axum::{routing::get, Router};

use super::handlers::{list_active_sessions, SessionHandlers};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/users/:user_id/sessions", get(list_active_sessions))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::adk::InMemorySessionBackend;
    use crate::application::handlers::session::ListActiveSessionsHandler;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router(backend: InMemorySessionBackend) -> Router {
        let handler = ListActiveSessionsHandler::new(Arc::new(backend));
        session_routes(SessionHandlers::new(Arc::new(handler)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn lists_sessions_for_user() {
        let backend = InMemorySessionBackend::new()
            .with_sessions(vec![json!({
                "id": "abcdefgh1234",
                "user_id": "u1",
                "app_name": "a",
                "last_update_time": "2024-01-01T00:00:00Z"
            })])
            .with_events("abcdefgh1234", vec![json!(1), json!(2), json!(3)]);

        let (status, body) = get_json(router(backend), "/users/u1/sessions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["sessions"][0]["messageCount"], 3);
        assert_eq!(body["sessions"][0]["title"], "Session abcdefgh");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn backend_failure_is_reported_in_body() {
        let backend = InMemorySessionBackend::new().with_listing_failure("boom");

        let (status, body) = get_json(router(backend), "/users/u1/sessions").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": false, "sessions": [], "error": "boom" }));
    }
}
