//! In-memory session backend for tests and local development.
//!
//! Scripted implementation of the SessionBackend port, so the aggregator can
//! run without an ADK server.
//!
//! # Features
//!
//! - Raw listing envelopes, including malformed ones
//! - Per-session event histories
//! - Error injection for the listing and for individual sessions
//! - Simulated per-session delays
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let backend = InMemorySessionBackend::new()
//!     .with_sessions(vec![json!({ "id": "s1", "user_id": "u1", "app_name": "a" })])
//!     .with_events("s1", vec![json!({ "author": "user" })]);
//! ```

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::{SessionId, UserId};
use crate::ports::{BackendError, ListedSessions, SessionBackend, SessionDetail};

#[derive(Debug, Clone)]
enum Listing {
    Absent,
    Envelope(Value),
    Failure(String),
}

#[derive(Debug, Clone, Default)]
struct DetailScript {
    events: Option<Vec<Value>>,
    failure: Option<String>,
    delay: Option<Duration>,
}

/// Scripted session backend.
#[derive(Debug)]
pub struct InMemorySessionBackend {
    listing: Listing,
    details: HashMap<String, DetailScript>,
    list_calls: AtomicUsize,
    detail_calls: Mutex<Vec<String>>,
}

impl InMemorySessionBackend {
    /// A backend that returns no listing at all.
    pub fn new() -> Self {
        Self {
            listing: Listing::Absent,
            details: HashMap::new(),
            list_calls: AtomicUsize::new(0),
            detail_calls: Mutex::new(Vec::new()),
        }
    }

    /// Serves `envelope` verbatim as the listing payload.
    pub fn with_envelope(mut self, envelope: Value) -> Self {
        self.listing = Listing::Envelope(envelope);
        self
    }

    /// Serves `{ "sessions": records }` as the listing payload.
    pub fn with_sessions(self, records: Vec<Value>) -> Self {
        self.with_envelope(json!({ "sessions": records }))
    }

    /// Makes the listing call fail with `message`.
    pub fn with_listing_failure(mut self, message: impl Into<String>) -> Self {
        self.listing = Listing::Failure(message.into());
        self
    }

    /// Sets the event history returned for a session.
    pub fn with_events(mut self, session_id: impl Into<String>, events: Vec<Value>) -> Self {
        self.details.entry(session_id.into()).or_default().events = Some(events);
        self
    }

    /// Makes the detail call for a session fail with `message`.
    pub fn with_detail_failure(
        mut self,
        session_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.details.entry(session_id.into()).or_default().failure = Some(message.into());
        self
    }

    /// Delays the detail call for a session. Implies an empty history.
    pub fn with_detail_delay(mut self, session_id: impl Into<String>, delay: Duration) -> Self {
        let script = self.details.entry(session_id.into()).or_default();
        script.delay = Some(delay);
        script.events.get_or_insert_with(Vec::new);
        self
    }

    /// Number of listing calls made so far.
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    /// Session ids passed to detail calls, in call order.
    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }
}

impl Default for InMemorySessionBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionBackend for InMemorySessionBackend {
    async fn list_user_sessions(
        &self,
        _user_id: &UserId,
    ) -> Result<Option<ListedSessions>, BackendError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        match &self.listing {
            Listing::Absent => Ok(None),
            Listing::Envelope(envelope) => ListedSessions::from_envelope(envelope).map(Some),
            Listing::Failure(message) => Err(BackendError::failed(message.clone())),
        }
    }

    async fn get_session_with_events(
        &self,
        _user_id: &UserId,
        session_id: &SessionId,
    ) -> Result<Option<SessionDetail>, BackendError> {
        self.detail_calls
            .lock()
            .unwrap()
            .push(session_id.as_str().to_string());

        let Some(script) = self.details.get(session_id.as_str()).cloned() else {
            return Ok(None);
        };

        if let Some(delay) = script.delay {
            sleep(delay).await;
        }

        if let Some(message) = script.failure {
            return Err(BackendError::failed(message));
        }

        Ok(script.events.map(|events| SessionDetail { events }))
    }
}
