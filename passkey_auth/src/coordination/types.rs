use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::backend::AuthenticatorAttachment;
use crate::biometric::BiometricType;

/// Classification of a reported passkey failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Registration reached the backend and was rejected
    CredentialFailed,
    /// Sign-in was rejected on credential grounds
    InvalidCredential,
    /// Transport failure or an ambiguous backend response
    NetworkError,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CredentialFailed => "CREDENTIAL_FAILED",
            Self::InvalidCredential => "INVALID_CREDENTIAL",
            Self::NetworkError => "NETWORK_ERROR",
        }
    }

    /// Whether the UI should offer a retry for this failure.
    pub fn is_retryable(self) -> bool {
        self == Self::NetworkError
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasskeyErrorDetail {
    pub code: ErrorCode,
    pub message: String,
}

impl PasskeyErrorDetail {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Payload of a successful passkey operation.
///
/// For registration `id` is the new passkey's id, for sign-in the session id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasskeyData {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a passkey operation.
///
/// `Cancelled` carries no error on purpose: a dismissed prompt is ordinary
/// user choice and must not be shown as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasskeyAuthResult {
    Success(PasskeyData),
    Cancelled,
    Failed(PasskeyErrorDetail),
}

impl PasskeyAuthResult {
    pub(crate) fn failed(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Failed(PasskeyErrorDetail::new(code, message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    pub fn data(&self) -> Option<&PasskeyData> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&PasskeyErrorDetail> {
        match self {
            Self::Failed(detail) => Some(detail),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct ResultWire<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a PasskeyData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a PasskeyErrorDetail>,
}

impl Serialize for PasskeyAuthResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ResultWire {
            success: self.is_success(),
            data: self.data(),
            error: self.error(),
        }
        .serialize(serializer)
    }
}

/// Observable state of a [`PasskeyAuth`](super::PasskeyAuth) instance.
///
/// Capability detection and the passkey operations share `is_loading` and the
/// single `error` surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasskeyAuthState {
    pub is_loading: bool,
    pub is_available: bool,
    pub biometric_type: BiometricType,
    pub error: Option<String>,
}

/// Options for [`PasskeyAuth::register_passkey_with`](super::PasskeyAuth::register_passkey_with).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterPasskeyOptions {
    /// Label for the new passkey; falls back to the device name
    pub name: Option<String>,
    pub authenticator_attachment: Option<AuthenticatorAttachment>,
}
