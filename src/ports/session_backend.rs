//! Session backend port (ADK session listing and detail).
//!
//! Defines the contract for reading a user's chat sessions from the agent
//! backend. Raw payloads are parsed here, at the boundary, so callers only
//! ever see typed values or a [`BackendError`].
//!
//! # Design
//!
//! - **Envelope semantics**: a listing envelope whose `sessions` field is
//!   missing or falsy means "no data", not an error.
//! - **Schema check**: a `sessions` field of the wrong type is reported as
//!   [`ListedSessions::Malformed`], never as a parse panic.
//! - **Records**: each listed record is validated individually; a bad record
//!   surfaces as [`BackendError::InvalidRecord`].

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::foundation::{SessionId, Timestamp, UserId};

/// Reader port for the agent backend's session store.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// List the sessions belonging to a user.
    ///
    /// Returns `None` when the backend has nothing for this user.
    async fn list_user_sessions(
        &self,
        user_id: &UserId,
    ) -> Result<Option<ListedSessions>, BackendError>;

    /// Fetch one session together with its event history.
    ///
    /// Returns `None` if the session is unknown to the backend.
    async fn get_session_with_events(
        &self,
        user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<Option<SessionDetail>, BackendError>;
}

/// Errors raised by session backend implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Failure reported verbatim by the backend or a test double.
    #[error("{0}")]
    Failed(String),

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Non-success HTTP status.
    #[error("backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not valid JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// A listed session record could not be understood.
    #[error("invalid session record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

impl BackendError {
    pub fn failed(message: impl Into<String>) -> Self {
        BackendError::Failed(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        BackendError::Network(message.into())
    }
}

/// Parsed listing envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum ListedSessions {
    /// The envelope had no usable `sessions` field.
    NoData,
    /// The sessions, in backend order.
    Sessions(Vec<RawSession>),
    /// `sessions` was present but not a sequence.
    Malformed {
        /// JSON type that was found instead.
        found: &'static str,
    },
}

impl ListedSessions {
    /// Interprets a `{ "sessions": [...] }` envelope.
    ///
    /// A missing, `null`, `false`, `0` or `""` field is treated as no data.
    /// Anything that is not an object is treated as no data as well.
    pub fn from_envelope(envelope: &Value) -> Result<Self, BackendError> {
        let Some(sessions) = envelope.get("sessions") else {
            return Ok(ListedSessions::NoData);
        };

        if is_falsy(sessions) {
            return Ok(ListedSessions::NoData);
        }

        let Value::Array(records) = sessions else {
            return Ok(ListedSessions::Malformed {
                found: json_kind(sessions),
            });
        };

        records
            .iter()
            .enumerate()
            .map(|(index, record)| RawSession::from_value(index, record))
            .collect::<Result<Vec<_>, _>>()
            .map(ListedSessions::Sessions)
    }
}

/// Session record as listed by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSession {
    pub id: SessionId,
    pub user_id: String,
    pub app_name: String,
    pub last_update_time: Option<Timestamp>,
}

#[derive(Deserialize)]
struct RawSessionRecord {
    id: String,
    #[serde(default, alias = "userId")]
    user_id: Option<String>,
    #[serde(default, alias = "appName")]
    app_name: Option<String>,
    #[serde(default, alias = "lastUpdateTime")]
    last_update_time: Option<Value>,
}

impl RawSession {
    fn from_value(index: usize, value: &Value) -> Result<Self, BackendError> {
        let record = RawSessionRecord::deserialize(value).map_err(|e| {
            BackendError::InvalidRecord {
                index,
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            id: SessionId::new(record.id),
            user_id: record.user_id.unwrap_or_default(),
            app_name: record.app_name.unwrap_or_default(),
            last_update_time: record.last_update_time.as_ref().and_then(parse_update_time),
        })
    }
}

/// Accepts ISO 8601 strings or Unix seconds; anything else is `None`.
fn parse_update_time(value: &Value) -> Option<Timestamp> {
    if is_falsy(value) {
        return None;
    }
    match value {
        Value::String(s) => Timestamp::parse_iso8601(s).ok(),
        Value::Number(n) => n.as_f64().and_then(|secs| Timestamp::from_unix_secs_f64(secs).ok()),
        _ => None,
    }
}

/// Session detail; only the event history is of interest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionDetail {
    pub events: Vec<Value>,
}

impl SessionDetail {
    /// Reads the `events` array. A missing or non-array field means no events.
    pub fn from_payload(payload: &Value) -> Self {
        let events = match payload.get("events") {
            Some(Value::Array(events)) => events.clone(),
            _ => Vec::new(),
        };
        Self { events }
    }

    pub fn message_count(&self) -> u32 {
        u32::try_from(self.events.len()).unwrap_or(u32::MAX)
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
