//! Session query handlers.

mod list_active_sessions;

pub use list_active_sessions::{ListActiveSessionsHandler, ListActiveSessionsQuery};
