use serde::Serialize;

use crate::coordination::{ErrorCode, PasskeyData};

/// What the prompt does when pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptMode {
    /// Add a passkey to the signed-in account
    Register { name: Option<String> },
    /// Sign in with an existing passkey
    SignIn {
        email: String,
        callback_url: Option<String>,
    },
}

impl PromptMode {
    pub fn is_register(&self) -> bool {
        matches!(self, Self::Register { .. })
    }
}

/// Callbacks receiving the outcome of a prompt press.
pub trait PromptHandler: Send + Sync {
    fn on_success(&self, data: &PasskeyData);
    fn on_error(&self, message: &str);
    fn on_cancel(&self);
}

/// Where a press ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Succeeded,
    Cancelled,
    Failed,
    /// Retry sheet opened for a network failure
    NetworkErrorShown,
    /// Press ignored because an operation was already running
    Ignored,
}

/// Retry sheet shown for network failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkErrorSheet {
    pub title: &'static str,
    pub message: String,
    pub code: Option<String>,
    pub retry_label: &'static str,
}

impl NetworkErrorSheet {
    pub fn new(message: impl Into<String>, code: Option<ErrorCode>) -> Self {
        Self {
            title: "Connection Error",
            message: message.into(),
            code: code.map(|c| c.as_str().to_string()),
            retry_label: "Try again",
        }
    }

    /// "Error code: ..." line, shown only when a code is known.
    pub fn code_line(&self) -> Option<String> {
        self.code.as_ref().map(|code| format!("Error code: {code}"))
    }
}

/// Everything the prompt screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptView {
    pub title: String,
    pub description: &'static str,
    pub button_text: &'static str,
    pub accessibility_label: &'static str,
    pub icon_name: &'static str,
    pub is_loading: bool,
    pub is_button_disabled: bool,
    pub network_error: Option<NetworkErrorSheet>,
}
