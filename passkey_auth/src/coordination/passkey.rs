use chrono::Utc;

use crate::backend::{AddPasskeyRequest, AuthFailure, SignInPasskeyRequest, SignInPasskeyResponse};
use crate::cancellation::is_user_cancellation;
use crate::config::PASSKEY_AUTHENTICATOR_ATTACHMENT;

use super::passkey_auth::PasskeyAuth;
use super::types::{ErrorCode, PasskeyAuthResult, PasskeyData, RegisterPasskeyOptions};

const REGISTRATION_FAILED: &str = "Registration failed";
const SIGN_IN_FAILED: &str = "Sign-in failed";
const DEFAULT_USER_NAME: &str = "User";

impl PasskeyAuth {
    /// Register a new passkey, labelled `name` or the device's own name.
    ///
    /// Triggers the native passkey prompt through the backend. A dismissed
    /// prompt resolves to [`PasskeyAuthResult::Cancelled`]; any other failure
    /// is reported as `CREDENTIAL_FAILED`.
    pub async fn register_passkey(&self, name: Option<&str>) -> PasskeyAuthResult {
        self.register_passkey_with(RegisterPasskeyOptions {
            name: name.map(str::to_string),
            authenticator_attachment: *PASSKEY_AUTHENTICATOR_ATTACHMENT,
        })
        .await
    }

    pub async fn register_passkey_with(
        &self,
        options: RegisterPasskeyOptions,
    ) -> PasskeyAuthResult {
        self.begin_operation();

        let name = self.resolve_passkey_name(options.name.as_deref());
        tracing::debug!("Registering passkey {:?}", name);

        let request = AddPasskeyRequest {
            name: name.clone(),
            authenticator_attachment: options.authenticator_attachment,
        };

        let result = match self.backend.add_passkey(request).await {
            Ok(response) => {
                let id = response.data.and_then(|d| d.id).unwrap_or_default();
                if id.is_empty() {
                    tracing::debug!("Backend returned no id for the new passkey");
                }
                PasskeyAuthResult::Success(PasskeyData {
                    id,
                    name,
                    created_at: Utc::now(),
                })
            }
            Err(err) => {
                let failure = AuthFailure::from(err);
                if is_user_cancellation(Some(&failure)) {
                    tracing::info!("Passkey registration cancelled by user");
                    PasskeyAuthResult::Cancelled
                } else {
                    let message = failure.message_or(REGISTRATION_FAILED);
                    tracing::error!("Passkey registration failed: {}", message);
                    PasskeyAuthResult::failed(ErrorCode::CredentialFailed, message)
                }
            }
        };

        self.finish_operation(&result);
        result
    }

    /// Sign in with a passkey.
    ///
    /// Thrown backend errors are treated as transport failures
    /// (`NETWORK_ERROR`); resolved errors are split into cancellation,
    /// `INVALID_CREDENTIAL` and `NETWORK_ERROR` by their message.
    pub async fn sign_in_with_passkey(
        &self,
        email: &str,
        callback_url: Option<&str>,
    ) -> PasskeyAuthResult {
        self.begin_operation();

        let request = SignInPasskeyRequest {
            email: email.to_string(),
            callback_url: callback_url.map(str::to_string),
        };

        let result = match self.backend.sign_in_passkey(request).await {
            Ok(response) => classify_sign_in_response(response),
            Err(err) => {
                let failure = AuthFailure::from(err);
                let message = failure.message_or(SIGN_IN_FAILED);
                tracing::error!("Passkey sign-in request failed: {}", message);
                PasskeyAuthResult::failed(ErrorCode::NetworkError, message)
            }
        };

        self.finish_operation(&result);
        result
    }

    /// Warm the backend's passkey list for the signed-in user.
    ///
    /// Leaves `is_loading` untouched and swallows failures. Returns the number
    /// of passkeys listed.
    pub async fn preload_passkeys(&self) -> usize {
        match self.backend.list_user_passkeys().await {
            Ok(passkeys) => {
                tracing::debug!("Preloaded {} passkeys", passkeys.len());
                passkeys.len()
            }
            Err(err) => {
                tracing::debug!("Passkey preload failed: {}", err);
                0
            }
        }
    }

    /// Label for a new passkey: the given name, then the device name, then the
    /// model name, then a per-platform default. Blank values count as absent.
    pub fn resolve_passkey_name(&self, name: Option<&str>) -> String {
        let non_blank = |value: &str| !value.trim().is_empty();

        name.filter(|n| non_blank(n))
            .map(str::to_string)
            .or_else(|| self.platform.device_name().filter(|n| non_blank(n)))
            .or_else(|| self.platform.model_name().filter(|n| non_blank(n)))
            .unwrap_or_else(|| self.platform.os().default_device_label().to_string())
    }
}

fn classify_sign_in_response(response: SignInPasskeyResponse) -> PasskeyAuthResult {
    let SignInPasskeyResponse { data, error } = response;

    if let Some(data) = data {
        if let Some(session) = data.session {
            let name = data
                .user
                .and_then(|user| user.name)
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());
            tracing::debug!("Passkey sign-in succeeded for session {}", session.id);
            return PasskeyAuthResult::Success(PasskeyData {
                id: session.id,
                name,
                created_at: Utc::now(),
            });
        }
    }

    match error {
        Some(body) => {
            let failure = AuthFailure::from(body);
            if is_user_cancellation(Some(&failure)) {
                tracing::info!("Passkey sign-in cancelled by user");
                return PasskeyAuthResult::Cancelled;
            }
            let message = failure.message_or(SIGN_IN_FAILED);
            let code = classify_sign_in_error(&message);
            tracing::error!("Passkey sign-in failed ({}): {}", code.as_str(), message);
            PasskeyAuthResult::failed(code, message)
        }
        None => {
            tracing::warn!(
                "Auth backend contract violation: sign-in resolved with neither session nor error"
            );
            PasskeyAuthResult::failed(ErrorCode::NetworkError, SIGN_IN_FAILED)
        }
    }
}

/// Credential-flavoured messages are `INVALID_CREDENTIAL`, everything else
/// `NETWORK_ERROR`.
fn classify_sign_in_error(message: &str) -> ErrorCode {
    let message = message.to_lowercase();
    if message.contains("invalid") || message.contains("credential") {
        ErrorCode::InvalidCredential
    } else {
        ErrorCode::NetworkError
    }
}
