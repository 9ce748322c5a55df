//! ADK backend adapters.
//!
//! Implementations of the SessionBackend port.
//!
//! ## Available Adapters
//!
//! - `AdkSessionClient` - HTTP client for the ADK API server
//! - `InMemorySessionBackend` - Scripted backend for testing

mod client;
mod in_memory;

pub use client::{AdkClientConfig, AdkSessionClient};
pub use in_memory::InMemorySessionBackend;
