//! Input gate for the chat composer.
//!
//! The gate is a pure derivation from the chat context: it never performs
//! I/O and never fails. Missing identity or session simply closes the gate.
//!
//! # Example
//!
//! ```
//! use chat_sessions::domain::chat::{ChatContext, DisabledReason};
//!
//! let ctx = ChatContext::new("alice", "", false, |msg: &str| msg.len());
//! let view = ctx.chat_input();
//!
//! assert!(view.form.disabled);
//! assert_eq!(view.eligibility.reason(), Some(DisabledReason::MissingSession));
//! ```

use serde::Serialize;
use std::fmt;
use thiserror::Error;

pub const USER_ID_REQUIRED_MESSAGE: &str =
    "Please set your User ID in the header to start chatting";
pub const SESSION_REQUIRED_MESSAGE: &str = "Please create a session to start chatting";

/// Why the gate is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisabledReason {
    /// No user id has been entered.
    MissingUserId,
    /// A user id is set but no session exists yet.
    MissingSession,
}

impl DisabledReason {
    /// Human-readable guidance shown in the warning banner.
    pub fn message(&self) -> &'static str {
        match self {
            DisabledReason::MissingUserId => USER_ID_REQUIRED_MESSAGE,
            DisabledReason::MissingSession => SESSION_REQUIRED_MESSAGE,
        }
    }

    /// Stable machine code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            DisabledReason::MissingUserId => "MISSING_USER_ID",
            DisabledReason::MissingSession => "MISSING_SESSION",
        }
    }
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Outcome of evaluating the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(DisabledReason),
}

impl Eligibility {
    /// Evaluates the gate. The user id is checked before the session id.
    pub fn evaluate(user_id: &str, session_id: &str) -> Self {
        if user_id.trim().is_empty() {
            return Eligibility::Ineligible(DisabledReason::MissingUserId);
        }
        if session_id.trim().is_empty() {
            return Eligibility::Ineligible(DisabledReason::MissingSession);
        }
        Eligibility::Eligible
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, Eligibility::Eligible)
    }

    pub fn reason(&self) -> Option<DisabledReason> {
        match self {
            Eligibility::Eligible => None,
            Eligibility::Ineligible(reason) => Some(*reason),
        }
    }

    /// Banner text, or an empty string when the gate is open.
    pub fn message(&self) -> &'static str {
        self.reason().map(|r| r.message()).unwrap_or("")
    }
}

/// Snapshot of the chat provider state the composer reads.
///
/// `handle_submit` is opaque to the gate; it is only ever forwarded.
#[derive(Debug, Clone)]
pub struct ChatContext<H> {
    pub user_id: String,
    pub session_id: String,
    pub is_loading: bool,
    pub handle_submit: H,
}

impl<H> ChatContext<H> {
    pub fn new(
        user_id: impl Into<String>,
        session_id: impl Into<String>,
        is_loading: bool,
        handle_submit: H,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            session_id: session_id.into(),
            is_loading,
            handle_submit,
        }
    }

    pub fn eligibility(&self) -> Eligibility {
        Eligibility::evaluate(&self.user_id, &self.session_id)
    }

    /// Derives the composer view for the current state.
    pub fn chat_input(&self) -> ChatInputView<'_, H> {
        let eligibility = self.eligibility();
        let banner = eligibility.reason().map(|reason| WarningBanner {
            message: reason.message(),
        });

        ChatInputView {
            eligibility,
            banner,
            form: InputFormProps {
                on_submit: &self.handle_submit,
                is_loading: self.is_loading,
                context: FormContext::Chat,
                disabled: !eligibility.can_submit(),
            },
        }
    }
}

/// Which surface hosts the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormContext {
    Chat,
}

/// Warning shown above the form while the gate is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WarningBanner {
    pub message: &'static str,
}

/// Props handed to the embedded input form.
#[derive(Debug)]
pub struct InputFormProps<'a, H> {
    pub on_submit: &'a H,
    pub is_loading: bool,
    pub context: FormContext,
    pub disabled: bool,
}

/// The derived composer: optional banner plus form props.
#[derive(Debug)]
pub struct ChatInputView<'a, H> {
    pub eligibility: Eligibility,
    pub banner: Option<WarningBanner>,
    pub form: InputFormProps<'a, H>,
}

/// Returned when a submission is attempted through a closed gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct SubmitBlocked(pub DisabledReason);

impl<'a, H> ChatInputView<'a, H> {
    /// Forwards `message` to the submit handler if the gate is open.
    pub fn submit<R>(&self, message: &str) -> Result<R, SubmitBlocked>
    where
        H: Fn(&str) -> R,
    {
        match self.eligibility {
            Eligibility::Eligible => Ok((self.form.on_submit)(message)),
            Eligibility::Ineligible(reason) => Err(SubmitBlocked(reason)),
        }
    }
}
