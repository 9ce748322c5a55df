//! HTTP routes for chat input endpoints.

use axum::{routing::get, Router};

use super::handlers::input_gate;

/// Creates the chat router. Stateless.
pub fn chat_routes() -> Router {
    Router::new().route("/chat/input-gate", get(input_gate))
}
