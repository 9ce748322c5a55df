//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `chat` - Input gating for the chat composer
//! - `session` - Active session summaries and listing results

pub mod chat;
pub mod foundation;
pub mod session;
