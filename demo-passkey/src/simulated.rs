use async_trait::async_trait;
use serde_json::{Value, json};
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use passkey_auth::{
    AddPasskeyRequest, AddPasskeyResponse, AddedPasskey, AuthBackend, AuthenticationType,
    BackendError, BackendErrorBody, BiometricPlatform, PasskeyData, PasskeySummary,
    PlatformAuthenticator, PlatformError, PlatformOs, PromptHandler, PromptMode, SessionInfo,
    SignInPasskeyRequest, SignInPasskeyResponse, UserInfo,
};

pub(crate) const DEMO_EMAIL: &str = "demo@example.com";

/// How the simulated device and backend behave, from `DEMO_SCENARIO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scenario {
    Success,
    Cancel,
    /// First attempt fails on the network, the retry succeeds
    Network,
    Invalid,
    /// Device without biometric hardware
    Unavailable,
}

impl Scenario {
    pub(crate) fn from_env() -> Self {
        match env::var("DEMO_SCENARIO").ok().as_deref() {
            None | Some("success") => Self::Success,
            Some("cancel") => Self::Cancel,
            Some("network") => Self::Network,
            Some("invalid") => Self::Invalid,
            Some("unavailable") => Self::Unavailable,
            Some(other) => {
                tracing::warn!("Unknown DEMO_SCENARIO {:?}, using success", other);
                Self::Success
            }
        }
    }
}

/// Which auth backend the demo talks to, from `DEMO_BACKEND`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BackendKind {
    Simulated,
    /// `HttpAuthBackend` configured by `PASSKEY_AUTH_URL` and `PASSKEY_AUTH_BASE_PATH`
    Http,
}

impl BackendKind {
    pub(crate) fn from_env() -> Self {
        match env::var("DEMO_BACKEND").ok().as_deref() {
            None | Some("simulated") => Self::Simulated,
            Some("http") => Self::Http,
            Some(other) => {
                tracing::warn!("Unknown DEMO_BACKEND {:?}, using simulated", other);
                Self::Simulated
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DemoMode {
    Register,
    SignIn,
}

impl DemoMode {
    pub(crate) fn from_env() -> Self {
        match env::var("DEMO_MODE").ok().as_deref() {
            None | Some("signin") => Self::SignIn,
            Some("register") => Self::Register,
            Some(other) => {
                tracing::warn!("Unknown DEMO_MODE {:?}, using signin", other);
                Self::SignIn
            }
        }
    }

    pub(crate) fn prompt_mode(self) -> PromptMode {
        match self {
            Self::Register => PromptMode::Register { name: None },
            Self::SignIn => PromptMode::SignIn {
                email: DEMO_EMAIL.to_string(),
                callback_url: Some("/dashboard".to_string()),
            },
        }
    }
}

pub(crate) struct SimulatedDevice {
    scenario: Scenario,
}

impl SimulatedDevice {
    pub(crate) fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }
}

#[async_trait]
impl BiometricPlatform for SimulatedDevice {
    fn os(&self) -> PlatformOs {
        PlatformOs::Ios
    }

    async fn has_hardware(&self) -> Result<bool, PlatformError> {
        Ok(self.scenario != Scenario::Unavailable)
    }

    async fn is_enrolled(&self) -> Result<bool, PlatformError> {
        Ok(true)
    }

    async fn supported_authentication_types(
        &self,
    ) -> Result<Vec<AuthenticationType>, PlatformError> {
        Ok(vec![AuthenticationType::FacialRecognition])
    }

    fn device_name(&self) -> Option<String> {
        Some("Demo iPhone".to_string())
    }

    fn model_name(&self) -> Option<String> {
        Some("iPhone 15".to_string())
    }
}

pub(crate) struct SimulatedBackend {
    scenario: Scenario,
    attempts: AtomicUsize,
}

impl SimulatedBackend {
    pub(crate) fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            attempts: AtomicUsize::new(0),
        }
    }

    /// Only the first attempt of the network scenario is dropped.
    fn network_down(&self) -> bool {
        self.scenario == Scenario::Network && self.attempts.fetch_add(1, Ordering::SeqCst) == 0
    }
}

#[async_trait]
impl AuthBackend for SimulatedBackend {
    async fn add_passkey(
        &self,
        request: AddPasskeyRequest,
    ) -> Result<AddPasskeyResponse, BackendError> {
        tracing::debug!("Simulated add_passkey: {:?}", request);

        if self.network_down() {
            return Err(BackendError::Network("Network request failed".to_string()));
        }
        match self.scenario {
            Scenario::Cancel => Err(BackendError::Authenticator(
                "User cancelled the request".to_string(),
            )),
            Scenario::Invalid => Err(BackendError::Http {
                status: 400,
                message: "Failed to verify registration".to_string(),
            }),
            _ => Ok(AddPasskeyResponse {
                data: Some(AddedPasskey {
                    id: Some(Uuid::new_v4().to_string()),
                }),
            }),
        }
    }

    async fn sign_in_passkey(
        &self,
        request: SignInPasskeyRequest,
    ) -> Result<SignInPasskeyResponse, BackendError> {
        tracing::debug!("Simulated sign_in_passkey: {:?}", request);

        if self.network_down() {
            return Err(BackendError::Network("Network request failed".to_string()));
        }
        match self.scenario {
            Scenario::Cancel => Ok(SignInPasskeyResponse::with_error(BackendErrorBody::new(
                "The operation was aborted",
            ))),
            Scenario::Invalid => Ok(SignInPasskeyResponse::with_error(BackendErrorBody {
                code: Some("INVALID_PASSKEY".to_string()),
                message: "Invalid passkey credential".to_string(),
                status: Some(401),
            })),
            _ => Ok(SignInPasskeyResponse::with_session(
                SessionInfo::new(format!("session-{}", Uuid::new_v4())),
                Some(UserInfo {
                    id: Some("user-1".to_string()),
                    email: Some(request.email),
                    name: Some("Demo User".to_string()),
                }),
            )),
        }
    }

    async fn list_user_passkeys(&self) -> Result<Vec<PasskeySummary>, BackendError> {
        Ok(vec![PasskeySummary {
            id: "pk-demo".to_string(),
            name: Some("Demo iPhone".to_string()),
            device_type: Some("singleDevice".to_string()),
            created_at: None,
        }])
    }
}

/// Native ceremony stand-in for the HTTP backend.
pub(crate) struct SimulatedAuthenticator {
    scenario: Scenario,
}

impl SimulatedAuthenticator {
    pub(crate) fn new(scenario: Scenario) -> Self {
        Self { scenario }
    }

    fn answer(&self, options: Value) -> Result<Value, BackendError> {
        tracing::debug!("Simulated ceremony for options: {}", options);
        if self.scenario == Scenario::Cancel {
            return Err(BackendError::Authenticator(
                "User cancelled the request".to_string(),
            ));
        }
        Ok(json!({
            "id": Uuid::new_v4().to_string(),
            "type": "public-key",
            "response": {"clientDataJSON": "e30"}
        }))
    }
}

#[async_trait]
impl PlatformAuthenticator for SimulatedAuthenticator {
    async fn create_credential(&self, options: Value) -> Result<Value, BackendError> {
        self.answer(options)
    }

    async fn get_assertion(&self, options: Value) -> Result<Value, BackendError> {
        self.answer(options)
    }
}

/// Prompt callbacks that only log.
pub(crate) struct LoggingHandler;

impl PromptHandler for LoggingHandler {
    fn on_success(&self, data: &PasskeyData) {
        tracing::info!("Passkey success: id={} name={}", data.id, data.name);
    }

    fn on_error(&self, message: &str) {
        tracing::error!("Passkey error: {}", message);
    }

    fn on_cancel(&self) {
        tracing::info!("Passkey prompt cancelled");
    }
}
