//! Application handlers.
//!
//! Query handlers that orchestrate domain operations over the ports.

pub mod session;

pub use session::{ListActiveSessionsHandler, ListActiveSessionsQuery};
