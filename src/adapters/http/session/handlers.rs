//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{ListActiveSessionsHandler, ListActiveSessionsQuery};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    list_handler: Arc<ListActiveSessionsHandler>,
}

impl SessionHandlers {
    pub fn new(list_handler: Arc<ListActiveSessionsHandler>) -> Self {
        Self { list_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/users/:user_id/sessions - List a user's active sessions
///
/// Always 200: success or failure travels in the body.
pub async fn list_active_sessions(
    State(handlers): State<SessionHandlers>,
    Path(user_id): Path<String>,
) -> Response {
    let result = handlers
        .list_handler
        .handle(ListActiveSessionsQuery::for_user(user_id))
        .await;

    (StatusCode::OK, Json(result)).into_response()
}
