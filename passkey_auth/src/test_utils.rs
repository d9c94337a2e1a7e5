//! Test doubles shared by the unit tests of this crate
//!
//! The mocks keep their configuration behind `Arc<Mutex<_>>` so a clone kept
//! by the test can inspect calls and change answers after the original has
//! been handed to a `PasskeyAuth`.

use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::backend::{
    AddPasskeyRequest, AddPasskeyResponse, AddedPasskey, AuthBackend, BackendError,
    PasskeySummary, PlatformAuthenticator, SessionInfo, SignInPasskeyRequest,
    SignInPasskeyResponse, UserInfo,
};
use crate::biometric::{AuthenticationType, BiometricPlatform, PlatformError, PlatformOs};
use crate::coordination::PasskeyData;
use crate::prompt::PromptHandler;

#[derive(Debug, Clone)]
struct PlatformConfig {
    os: PlatformOs,
    has_hardware: bool,
    is_enrolled: bool,
    modalities: Vec<AuthenticationType>,
    hardware_error: Option<PlatformError>,
    enrollment_error: Option<PlatformError>,
    modalities_error: Option<PlatformError>,
    gate: Option<Arc<Notify>>,
    device_name: Option<String>,
    model_name: Option<String>,
}

/// Scriptable [`BiometricPlatform`] recording the order of its queries.
#[derive(Debug, Clone)]
pub(crate) struct MockPlatform {
    config: Arc<Mutex<PlatformConfig>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl MockPlatform {
    fn with_config(config: PlatformConfig) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Enrolled iPhone with Face ID.
    pub(crate) fn ios() -> Self {
        Self::with_config(PlatformConfig {
            os: PlatformOs::Ios,
            has_hardware: true,
            is_enrolled: true,
            modalities: vec![AuthenticationType::FacialRecognition],
            hardware_error: None,
            enrollment_error: None,
            modalities_error: None,
            gate: None,
            device_name: Some("Test iPhone".to_string()),
            model_name: Some("iPhone 14 Pro".to_string()),
        })
    }

    /// Enrolled Android phone with a fingerprint reader.
    pub(crate) fn android() -> Self {
        Self::with_config(PlatformConfig {
            os: PlatformOs::Android,
            has_hardware: true,
            is_enrolled: true,
            modalities: vec![AuthenticationType::Fingerprint],
            hardware_error: None,
            enrollment_error: None,
            modalities_error: None,
            gate: None,
            device_name: Some("Test Pixel".to_string()),
            model_name: Some("Pixel 8".to_string()),
        })
    }

    fn update(self, f: impl FnOnce(&mut PlatformConfig)) -> Self {
        f(&mut *self.config.lock().unwrap());
        self
    }

    pub(crate) fn with_hardware(self, has_hardware: bool) -> Self {
        self.update(|c| c.has_hardware = has_hardware)
    }

    pub(crate) fn with_enrolled(self, is_enrolled: bool) -> Self {
        self.update(|c| c.is_enrolled = is_enrolled)
    }

    pub(crate) fn with_modalities(self, modalities: Vec<AuthenticationType>) -> Self {
        self.update(|c| c.modalities = modalities)
    }

    pub(crate) fn with_hardware_error(self, error: PlatformError) -> Self {
        self.update(|c| c.hardware_error = Some(error))
    }

    pub(crate) fn with_enrollment_error(self, error: PlatformError) -> Self {
        self.update(|c| c.enrollment_error = Some(error))
    }

    pub(crate) fn with_modalities_error(self, error: PlatformError) -> Self {
        self.update(|c| c.modalities_error = Some(error))
    }

    /// Hold `has_hardware` until the gate is notified.
    pub(crate) fn with_gate(self, gate: Arc<Notify>) -> Self {
        self.update(|c| c.gate = Some(gate))
    }

    pub(crate) fn with_device_name(self, name: Option<&str>) -> Self {
        self.update(|c| c.device_name = name.map(str::to_string))
    }

    pub(crate) fn with_model_name(self, name: Option<&str>) -> Self {
        self.update(|c| c.model_name = name.map(str::to_string))
    }

    pub(crate) fn clear_hardware_error(&self) {
        self.config.lock().unwrap().hardware_error = None;
    }

    pub(crate) fn set_modalities(&self, modalities: Vec<AuthenticationType>) {
        self.config.lock().unwrap().modalities = modalities;
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> PlatformConfig {
        self.calls.lock().unwrap().push(call);
        self.config.lock().unwrap().clone()
    }
}

#[async_trait]
impl BiometricPlatform for MockPlatform {
    fn os(&self) -> PlatformOs {
        self.config.lock().unwrap().os
    }

    async fn has_hardware(&self) -> Result<bool, PlatformError> {
        let config = self.record("has_hardware");
        if let Some(gate) = &config.gate {
            gate.notified().await;
        }
        match config.hardware_error {
            Some(err) => Err(err),
            None => Ok(config.has_hardware),
        }
    }

    async fn is_enrolled(&self) -> Result<bool, PlatformError> {
        let config = self.record("is_enrolled");
        match config.enrollment_error {
            Some(err) => Err(err),
            None => Ok(config.is_enrolled),
        }
    }

    async fn supported_authentication_types(
        &self,
    ) -> Result<Vec<AuthenticationType>, PlatformError> {
        let config = self.record("supported_authentication_types");
        match config.modalities_error {
            Some(err) => Err(err),
            None => Ok(config.modalities),
        }
    }

    fn device_name(&self) -> Option<String> {
        self.config.lock().unwrap().device_name.clone()
    }

    fn model_name(&self) -> Option<String> {
        self.config.lock().unwrap().model_name.clone()
    }
}

#[derive(Debug)]
struct BackendState {
    add_result: Result<AddPasskeyResponse, BackendError>,
    sign_in_result: Result<SignInPasskeyResponse, BackendError>,
    passkeys: Result<Vec<PasskeySummary>, BackendError>,
    add_requests: Vec<AddPasskeyRequest>,
    sign_in_requests: Vec<SignInPasskeyRequest>,
    gate: Option<Arc<Notify>>,
}

/// Scriptable [`AuthBackend`] recording the requests it receives.
#[derive(Debug, Clone)]
pub(crate) struct MockBackend {
    state: Arc<Mutex<BackendState>>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self {
            state: Arc::new(Mutex::new(BackendState {
                add_result: Ok(AddPasskeyResponse {
                    data: Some(AddedPasskey {
                        id: Some("test-passkey-id-123".to_string()),
                    }),
                }),
                sign_in_result: Ok(SignInPasskeyResponse::with_session(
                    SessionInfo::new("session-123"),
                    Some(UserInfo::named("Test User")),
                )),
                passkeys: Ok(Vec::new()),
                add_requests: Vec::new(),
                sign_in_requests: Vec::new(),
                gate: None,
            })),
        }
    }
}

impl MockBackend {
    pub(crate) fn with_add_result(self, result: Result<AddPasskeyResponse, BackendError>) -> Self {
        self.set_add_result(result);
        self
    }

    pub(crate) fn with_sign_in_result(
        self,
        result: Result<SignInPasskeyResponse, BackendError>,
    ) -> Self {
        self.set_sign_in_result(result);
        self
    }

    pub(crate) fn with_passkeys(self, result: Result<Vec<PasskeySummary>, BackendError>) -> Self {
        self.state.lock().unwrap().passkeys = result;
        self
    }

    /// Hold the passkey operations until the gate is notified.
    pub(crate) fn with_gate(self, gate: Arc<Notify>) -> Self {
        self.state.lock().unwrap().gate = Some(gate);
        self
    }

    pub(crate) fn set_add_result(&self, result: Result<AddPasskeyResponse, BackendError>) {
        self.state.lock().unwrap().add_result = result;
    }

    pub(crate) fn set_sign_in_result(&self, result: Result<SignInPasskeyResponse, BackendError>) {
        self.state.lock().unwrap().sign_in_result = result;
    }

    pub(crate) fn add_requests(&self) -> Vec<AddPasskeyRequest> {
        self.state.lock().unwrap().add_requests.clone()
    }

    pub(crate) fn sign_in_requests(&self) -> Vec<SignInPasskeyRequest> {
        self.state.lock().unwrap().sign_in_requests.clone()
    }
}

#[async_trait]
impl AuthBackend for MockBackend {
    async fn add_passkey(
        &self,
        request: AddPasskeyRequest,
    ) -> Result<AddPasskeyResponse, BackendError> {
        let (result, gate) = {
            let mut state = self.state.lock().unwrap();
            state.add_requests.push(request);
            (state.add_result.clone(), state.gate.clone())
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        result
    }

    async fn sign_in_passkey(
        &self,
        request: SignInPasskeyRequest,
    ) -> Result<SignInPasskeyResponse, BackendError> {
        let (result, gate) = {
            let mut state = self.state.lock().unwrap();
            state.sign_in_requests.push(request);
            (state.sign_in_result.clone(), state.gate.clone())
        };
        if let Some(gate) = gate {
            gate.notified().await;
        }
        result
    }

    async fn list_user_passkeys(&self) -> Result<Vec<PasskeySummary>, BackendError> {
        self.state.lock().unwrap().passkeys.clone()
    }
}

/// [`PlatformAuthenticator`] answering every ceremony with a fixed credential.
#[derive(Debug, Clone, Default)]
pub(crate) struct StaticAuthenticator;

#[async_trait]
impl PlatformAuthenticator for StaticAuthenticator {
    async fn create_credential(&self, _options: Value) -> Result<Value, BackendError> {
        Ok(json!({"id": "credential-id", "type": "public-key"}))
    }

    async fn get_assertion(&self, _options: Value) -> Result<Value, BackendError> {
        Ok(json!({"id": "credential-id", "type": "public-key"}))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HandlerEvent {
    Success(String),
    Error(String),
    Cancel,
}

/// [`PromptHandler`] recording each callback it receives.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingHandler {
    events: Arc<Mutex<Vec<HandlerEvent>>>,
}

impl RecordingHandler {
    pub(crate) fn events(&self) -> Vec<HandlerEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl PromptHandler for RecordingHandler {
    fn on_success(&self, data: &PasskeyData) {
        self.events
            .lock()
            .unwrap()
            .push(HandlerEvent::Success(data.id.clone()));
    }

    fn on_error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(HandlerEvent::Error(message.to_string()));
    }

    fn on_cancel(&self) {
        self.events.lock().unwrap().push(HandlerEvent::Cancel);
    }
}
