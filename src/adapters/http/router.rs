//! Top-level API router.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::chat::chat_routes;
use super::session::{session_routes, SessionHandlers};

/// Assembles every endpoint:
///
/// - `GET /health`
/// - `GET /api/users/:user_id/sessions`
/// - `GET /api/chat/input-gate`
pub fn app_router(session_handlers: SessionHandlers) -> Router {
    let api = session_routes(session_handlers).merge(chat_routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::adk::InMemorySessionBackend;
    use crate::application::handlers::session::ListActiveSessionsHandler;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let handler = ListActiveSessionsHandler::new(Arc::new(InMemorySessionBackend::new()));
        app_router(SessionHandlers::new(Arc::new(handler)))
    }

    async fn status_of(uri: &str) -> StatusCode {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(status_of("/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn api_routes_are_nested() {
        assert_eq!(status_of("/api/users/u1/sessions").await, StatusCode::OK);
        assert_eq!(status_of("/api/chat/input-gate").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        assert_eq!(status_of("/users/u1/sessions").await, StatusCode::NOT_FOUND);
    }
}
