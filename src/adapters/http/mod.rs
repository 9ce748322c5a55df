//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod chat;
mod router;
pub mod session;

pub use router::app_router;
pub use session::SessionHandlers;
