use std::sync::Arc;
use tokio::sync::watch;

use crate::backend::AuthBackend;
use crate::biometric::{BiometricPlatform, BiometricType, detect_biometric_type};

use super::types::{PasskeyAuthResult, PasskeyAuthState};

const AVAILABILITY_CHECK_FAILED: &str = "Failed to check availability";

/// Passkey and biometric authentication coordinator.
///
/// One instance per consumer. State changes are published through a
/// [`watch`] channel; call [`subscribe`](Self::subscribe) to observe them.
/// Overlapping operations are not guarded against, so callers should not
/// start a new one while [`is_loading`](Self::is_loading) is true.
pub struct PasskeyAuth {
    pub(super) platform: Arc<dyn BiometricPlatform>,
    pub(super) backend: Arc<dyn AuthBackend>,
    state: watch::Sender<PasskeyAuthState>,
}

impl PasskeyAuth {
    pub fn new(platform: Arc<dyn BiometricPlatform>, backend: Arc<dyn AuthBackend>) -> Self {
        let (state, _) = watch::channel(PasskeyAuthState::default());
        Self {
            platform,
            backend,
            state,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PasskeyAuthState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<PasskeyAuthState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn is_available(&self) -> bool {
        self.state.borrow().is_available
    }

    pub fn biometric_type(&self) -> BiometricType {
        self.state.borrow().biometric_type
    }

    /// Last error message, if any.
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Detect biometric hardware, enrollment and modality.
    ///
    /// Fails closed: if the platform query errors, the device is reported as
    /// unavailable and the message is kept in `error`.
    pub async fn check_availability(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });

        let detected = detect_biometric_type(self.platform.as_ref()).await;

        self.state.send_modify(|state| {
            match &detected {
                Ok(biometric_type) => {
                    state.biometric_type = *biometric_type;
                    state.is_available = biometric_type.is_available();
                }
                Err(err) => {
                    tracing::warn!("Biometric availability check failed: {}", err);
                    let message = err.to_string();
                    state.error = Some(if message.trim().is_empty() {
                        AVAILABILITY_CHECK_FAILED.to_string()
                    } else {
                        message
                    });
                    state.is_available = false;
                    state.biometric_type = BiometricType::None;
                }
            }
            state.is_loading = false;
        });
    }

    pub(super) fn begin_operation(&self) {
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });
    }

    pub(super) fn finish_operation(&self, result: &PasskeyAuthResult) {
        let error = result.error().map(|detail| detail.message.clone());
        self.state.send_modify(|state| {
            state.is_loading = false;
            state.error = error;
        });
    }
}
