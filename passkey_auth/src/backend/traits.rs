use async_trait::async_trait;
use serde_json::Value;

use super::errors::BackendError;
use super::types::{
    AddPasskeyRequest, AddPasskeyResponse, PasskeySummary, SignInPasskeyRequest,
    SignInPasskeyResponse,
};

/// Remote auth backend consumed by the coordinator.
///
/// Both passkey calls are expected to trigger the native passkey prompt as a
/// side effect; the coordinator only observes the outcome.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Register a new passkey for the signed-in user. May throw.
    async fn add_passkey(
        &self,
        request: AddPasskeyRequest,
    ) -> Result<AddPasskeyResponse, BackendError>;

    /// Sign in with a passkey.
    ///
    /// Ordinary auth failures resolve with `error` set; `Err` is reserved for
    /// transport-level failures.
    async fn sign_in_passkey(
        &self,
        request: SignInPasskeyRequest,
    ) -> Result<SignInPasskeyResponse, BackendError>;

    /// List the passkeys registered for the signed-in user.
    async fn list_user_passkeys(&self) -> Result<Vec<PasskeySummary>, BackendError>;
}

/// Native passkey ceremony (WebAuthn `navigator.credentials`, iOS
/// `ASAuthorizationController`, Android Credential Manager).
///
/// Options and responses are passed through as JSON untouched.
#[async_trait]
pub trait PlatformAuthenticator: Send + Sync {
    /// Create a credential from registration options.
    async fn create_credential(&self, options: Value) -> Result<Value, BackendError>;

    /// Produce an assertion from authentication options.
    async fn get_assertion(&self, options: Value) -> Result<Value, BackendError>;
}
