//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the chat sessions domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::ValidationError;
pub use ids::{SessionId, UserId};
pub use timestamp::Timestamp;
