//! ListActiveSessionsHandler - Query handler that reconciles a user's sessions
//! with the ADK backend.
//!
//! Lists the user's sessions, then looks up every session's event history
//! concurrently to derive a message count. A failed lookup degrades only its
//! own entry; the listing itself is the only call that can fail the result.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, error, info, warn};

use crate::domain::foundation::UserId;
use crate::domain::session::{ActiveSession, SessionListResult, INVALID_SESSIONS_FORMAT};
use crate::ports::{BackendError, ListedSessions, RawSession, SessionBackend};

/// Query to list the active sessions of a user.
#[derive(Debug, Clone)]
pub struct ListActiveSessionsQuery {
    pub user_id: String,
}

impl ListActiveSessionsQuery {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Handler for listing active sessions.
pub struct ListActiveSessionsHandler {
    backend: Arc<dyn SessionBackend>,
}

impl ListActiveSessionsHandler {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self { backend }
    }

    pub async fn handle(&self, query: ListActiveSessionsQuery) -> SessionListResult {
        self.fetch_active_sessions(&query.user_id).await
    }

    /// Lists the user's sessions with message counts.
    ///
    /// Never returns an error: every failure is folded into the result.
    pub async fn fetch_active_sessions(&self, user_id: &str) -> SessionListResult {
        info!(user_id, "Fetching active sessions");

        match self.try_fetch(user_id).await {
            Ok(result) => result,
            Err(e) => {
                error!(user_id, error = %e, "Error fetching active sessions");
                SessionListResult::failure(e.to_string())
            }
        }
    }

    async fn try_fetch(&self, user_id: &str) -> Result<SessionListResult, BackendError> {
        let user_id = UserId::new(user_id);

        let sessions = match self.backend.list_user_sessions(&user_id).await? {
            None | Some(ListedSessions::NoData) => {
                warn!(user_id = %user_id, "No sessions data in backend response");
                return Ok(SessionListResult::empty());
            }
            Some(ListedSessions::Malformed { found }) => {
                error!(user_id = %user_id, found, "Sessions field is not an array");
                return Ok(SessionListResult::failure(INVALID_SESSIONS_FORMAT));
            }
            Some(ListedSessions::Sessions(sessions)) => sessions,
        };

        if sessions.is_empty() {
            debug!(user_id = %user_id, "No sessions found for user");
            return Ok(SessionListResult::empty());
        }

        let lookups = sessions
            .into_iter()
            .map(|session| self.summarize(&user_id, session));
        let summaries = join_all(lookups).await;

        debug!(user_id = %user_id, count = summaries.len(), "Assembled active sessions");
        Ok(SessionListResult::ok(summaries))
    }

    /// Builds one summary. A failed detail lookup yields a zero count.
    async fn summarize(&self, user_id: &UserId, session: RawSession) -> ActiveSession {
        let message_count = match self
            .backend
            .get_session_with_events(user_id, &session.id)
            .await
        {
            Ok(Some(detail)) => detail.message_count(),
            Ok(None) => 0,
            Err(e) => {
                warn!(
                    session_id = %session.id,
                    error = %e,
                    "Failed to get events for session"
                );
                0
            }
        };

        ActiveSession::new(
            session.id,
            session.user_id,
            session.app_name,
            session.last_update_time,
            message_count,
        )
    }
}
