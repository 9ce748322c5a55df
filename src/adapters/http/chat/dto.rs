//! HTTP DTOs for chat input endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatInputView, FormContext};

/// Query parameters describing the current chat context.
///
/// Missing parameters count as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputGateQuery {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub is_loading: bool,
}

/// Gate state for the composer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputGateResponse {
    pub can_submit: bool,
    pub disabled: bool,
    pub is_loading: bool,
    pub context: FormContext,
    /// Banner text; empty when the gate is open.
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
}

impl<H> From<&ChatInputView<'_, H>> for InputGateResponse {
    fn from(view: &ChatInputView<'_, H>) -> Self {
        Self {
            can_submit: view.eligibility.can_submit(),
            disabled: view.form.disabled,
            is_loading: view.form.is_loading,
            context: view.form.context,
            message: view.eligibility.message().to_string(),
            reason: view.eligibility.reason().map(|r| r.code()),
        }
    }
}
