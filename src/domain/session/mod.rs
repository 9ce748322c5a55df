//! Session domain module.
//!
//! Read-side summaries of chat sessions held by the ADK backend. Nothing
//! here is persisted; summaries are rebuilt on every listing.

mod active_session;

pub use active_session::{
    synthesize_title, ActiveSession, SessionListResult, INVALID_SESSIONS_FORMAT,
    TITLE_ID_PREFIX_LEN, UNKNOWN_ERROR,
};
