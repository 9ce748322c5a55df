//! HTTP adapter for chat input endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{InputGateQuery, InputGateResponse};
pub use routes::chat_routes;
