//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `SessionBackend` - Session listing and event history from the ADK backend

mod session_backend;

pub use session_backend::{BackendError, ListedSessions, RawSession, SessionBackend, SessionDetail};
