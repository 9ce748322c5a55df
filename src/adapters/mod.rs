//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `adk` - Session backend implementations (ADK HTTP client, in-memory)
//! - `http` - REST API for the chat front end

pub mod adk;
pub mod http;

pub use adk::{AdkClientConfig, AdkSessionClient, InMemorySessionBackend};
