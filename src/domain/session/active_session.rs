//! Active session summaries and the aggregated listing result.

use serde::Serialize;

use crate::domain::foundation::{SessionId, Timestamp};

/// Number of id characters used when synthesizing a session title.
pub const TITLE_ID_PREFIX_LEN: usize = 8;

pub const INVALID_SESSIONS_FORMAT: &str = "Invalid sessions data format";
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Summary of a session that exists on the backend, shaped for the UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub id: SessionId,
    pub user_id: String,
    pub app_name: String,
    pub last_update_time: Option<Timestamp>,
    pub message_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ActiveSession {
    /// Builds a summary with a title derived from the session id.
    pub fn new(
        id: SessionId,
        user_id: impl Into<String>,
        app_name: impl Into<String>,
        last_update_time: Option<Timestamp>,
        message_count: u32,
    ) -> Self {
        let title = Some(synthesize_title(&id));
        Self {
            id,
            user_id: user_id.into(),
            app_name: app_name.into(),
            last_update_time,
            message_count,
            title,
        }
    }
}

/// "Session " followed by the first eight characters of the id.
pub fn synthesize_title(id: &SessionId) -> String {
    format!("Session {}", id.prefix(TITLE_ID_PREFIX_LEN))
}

/// Outcome of listing a user's active sessions.
///
/// Constructed only through [`SessionListResult::ok`] and
/// [`SessionListResult::failure`], so a failed result always carries an
/// error and no sessions, and a successful one never carries an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionListResult {
    success: bool,
    sessions: Vec<ActiveSession>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl SessionListResult {
    pub fn ok(sessions: Vec<ActiveSession>) -> Self {
        Self {
            success: true,
            sessions,
            error: None,
        }
    }

    pub fn empty() -> Self {
        Self::ok(Vec::new())
    }

    /// Failed result. A blank message becomes "Unknown error".
    pub fn failure(error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            error
        };
        Self {
            success: false,
            sessions: Vec::new(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn sessions(&self) -> &[ActiveSession] {
        &self.sessions
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn session_id(id: &str) -> SessionId {
        SessionId::new(id)
    }

    #[test]
    fn title_uses_first_eight_characters() {
        assert_eq!(synthesize_title(&session_id("abcdefgh1234")), "Session abcdefgh");
    }

    #[test]
    fn title_uses_whole_id_when_short() {
        assert_eq!(synthesize_title(&session_id("abc")), "Session abc");
    }

    #[test]
    fn new_session_carries_synthesized_title() {
        let session = ActiveSession::new(session_id("12345678-aaaa"), "u1", "app", None, 2);
        assert_eq!(session.title.as_deref(), Some("Session 12345678"));
        assert_eq!(session.message_count, 2);
    }

    #[test]
    fn active_session_serializes_in_camel_case() {
        let ts = Timestamp::parse_rfc3339("2024-01-01T00:00:00Z").unwrap();
        let session = ActiveSession::new(session_id("abcdefgh1234"), "u1", "a", Some(ts), 3);

        let value = serde_json::to_value(&session).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "abcdefgh1234",
                "userId": "u1",
                "appName": "a",
                "lastUpdateTime": "2024-01-01T00:00:00Z",
                "messageCount": 3,
                "title": "Session abcdefgh"
            })
        );
    }

    #[test]
    fn missing_update_time_serializes_as_null() {
        let session = ActiveSession::new(session_id("s1"), "u1", "a", None, 0);
        let value = serde_json::to_value(&session).unwrap();
        assert!(value["lastUpdateTime"].is_null());
    }

    #[test]
    fn ok_result_omits_error() {
        let value = serde_json::to_value(SessionListResult::empty()).unwrap();
        assert_eq!(value, json!({ "success": true, "sessions": [] }));
    }

    #[test]
    fn failure_result_has_error_and_no_sessions() {
        let result = SessionListResult::failure("boom");

        assert!(!result.is_success());
        assert!(result.sessions().is_empty());
        assert_eq!(result.error(), Some("boom"));
    }

    #[test]
    fn title_for_empty_id_is_bare_prefix() {
        assert_eq!(synthesize_title(&session_id("")), "Session ");
    }

    #[test]
    fn failure_with_blank_message_reports_unknown_error() {
        let result = SessionListResult::failure("");
        assert_eq!(result.error(), Some(UNKNOWN_ERROR));
    }

    proptest! {
        #[test]
        fn failure_invariant_holds_for_any_message(message in ".*") {
            let result = SessionListResult::failure(message);
            prop_assert!(!result.is_success());
            prop_assert!(result.sessions().is_empty());
            prop_assert!(result.error().is_some());
        }

        #[test]
        fn title_never_exceeds_prefix(id in "[a-z0-9-]{0,40}") {
            let title = synthesize_title(&SessionId::new(id.clone()));
            let suffix = title.strip_prefix("Session ").unwrap();
            prop_assert!(suffix.chars().count() <= TITLE_ID_PREFIX_LEN);
            prop_assert!(id.starts_with(suffix));
        }
    }
}
