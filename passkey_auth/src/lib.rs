//! passkey_auth - Passkey and biometric authentication coordinator
//!
//! This crate detects the biometric capability of the device, drives passkey
//! registration and sign-in against a remote auth backend, and classifies the
//! outcome (success, user cancellation, credential failure, network failure)
//! so that a UI layer can react without handling errors itself.

mod backend;
mod biometric;
mod cancellation;
mod config;
mod coordination;
mod prompt;

#[cfg(test)]
mod test_utils;

pub use backend::{
    AddPasskeyRequest, AddPasskeyResponse, AddedPasskey, AuthBackend, AuthFailure,
    AuthenticatorAttachment, BackendError, BackendErrorBody, HttpAuthBackend, PasskeySummary,
    PlatformAuthenticator, SessionInfo, SignInData, SignInPasskeyRequest, SignInPasskeyResponse,
    UserInfo,
};

pub use biometric::{
    AuthenticationType, BiometricPlatform, BiometricType, PlatformError, PlatformOs,
    classify_modalities, detect_biometric_type,
};

pub use cancellation::{CANCELLATION_KEYWORDS, is_cancellation_message, is_user_cancellation};

pub use config::{
    PASSKEY_AUTH_BASE_PATH, PASSKEY_AUTH_URL, PASSKEY_AUTHENTICATOR_ATTACHMENT,
    PASSKEY_HTTP_TIMEOUT,
};

pub use coordination::{
    ErrorCode, PasskeyAuth, PasskeyAuthResult, PasskeyAuthState, PasskeyData, PasskeyErrorDetail,
    RegisterPasskeyOptions,
};

pub use prompt::{
    BiometricPrompt, NetworkErrorSheet, PromptHandler, PromptMode, PromptOutcome, PromptView,
};
