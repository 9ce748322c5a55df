//! Chat module - Input gating for the chat composer.
//!
//! Decides whether a message may be submitted given the current chat
//! context, and what the user is told when it may not.

mod input_gate;

pub use input_gate::{
    ChatContext, ChatInputView, DisabledReason, Eligibility, FormContext, InputFormProps,
    SubmitBlocked, WarningBanner, SESSION_REQUIRED_MESSAGE, USER_ID_REQUIRED_MESSAGE,
};
