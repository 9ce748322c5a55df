//! HTTP handlers for chat input endpoints.

use axum::{extract::Query, Json};

use crate::domain::chat::ChatContext;

use super::dto::{InputGateQuery, InputGateResponse};

/// GET /api/chat/input-gate - Evaluate whether the composer may submit
pub async fn input_gate(Query(query): Query<InputGateQuery>) -> Json<InputGateResponse> {
    let ctx = ChatContext::new(query.user_id, query.session_id, query.is_loading, ());
    Json(InputGateResponse::from(&ctx.chat_input()))
}
