use tokio::sync::watch;

use crate::coordination::{PasskeyAuth, PasskeyAuthResult};

use super::types::{NetworkErrorSheet, PromptHandler, PromptMode, PromptOutcome, PromptView};

#[derive(Debug, Clone, Default)]
struct PromptUiState {
    is_processing: bool,
    network_error: Option<NetworkErrorSheet>,
}

/// Biometric prompt for registering a passkey or signing in with one.
///
/// Owns its [`PasskeyAuth`] for the lifetime of the screen. Presses are
/// ignored while an operation is running, which is what keeps operations on
/// the coordinator from overlapping.
pub struct BiometricPrompt<H: PromptHandler> {
    auth: PasskeyAuth,
    mode: PromptMode,
    handler: H,
    ui: watch::Sender<PromptUiState>,
}

impl<H: PromptHandler> BiometricPrompt<H> {
    pub fn new(auth: PasskeyAuth, mode: PromptMode, handler: H) -> Self {
        let (ui, _) = watch::channel(PromptUiState::default());
        Self {
            auth,
            mode,
            handler,
            ui,
        }
    }

    pub fn auth(&self) -> &PasskeyAuth {
        &self.auth
    }

    pub fn mode(&self) -> &PromptMode {
        &self.mode
    }

    /// Detect the biometric type so the right icon and label are shown.
    pub async fn mount(&self) {
        self.auth.check_availability().await;
    }

    pub fn is_busy(&self) -> bool {
        self.auth.is_loading() || self.ui.borrow().is_processing
    }

    pub fn view(&self) -> PromptView {
        let biometric_type = self.auth.biometric_type();
        let biometric_name = biometric_type.display_name();
        let is_loading = self.is_busy();
        let network_error = self.ui.borrow().network_error.clone();

        let (title, description, button_text, accessibility_label) = if self.mode.is_register() {
            (
                format!("Add {biometric_name}"),
                "Secure your account with biometric authentication",
                "Add Passkey",
                "Add Passkey",
            )
        } else {
            (
                format!("Sign in with {biometric_name}"),
                "Use your biometric to sign in quickly and securely",
                "Sign in",
                "Sign in with biometrics",
            )
        };

        PromptView {
            title,
            description,
            button_text,
            accessibility_label,
            icon_name: biometric_type.icon_name(),
            is_loading,
            is_button_disabled: is_loading,
            network_error,
        }
    }

    /// Run the operation for this prompt's mode and route the outcome.
    pub async fn press(&self) -> PromptOutcome {
        let auth_loading = self.auth.is_loading();
        let started = self.ui.send_if_modified(|ui| {
            if ui.is_processing || auth_loading {
                false
            } else {
                ui.is_processing = true;
                true
            }
        });
        if !started {
            tracing::debug!("Ignoring prompt press while an operation is running");
            return PromptOutcome::Ignored;
        }

        let result = match &self.mode {
            PromptMode::Register { name } => self.auth.register_passkey(name.as_deref()).await,
            PromptMode::SignIn {
                email,
                callback_url,
            } => {
                self.auth
                    .sign_in_with_passkey(email, callback_url.as_deref())
                    .await
            }
        };

        self.ui.send_modify(|ui| ui.is_processing = false);
        self.route(result)
    }

    /// Close the retry sheet and press again.
    ///
    /// Ignored while an operation is running; the sheet then stays open.
    pub async fn retry(&self) -> PromptOutcome {
        if self.is_busy() {
            tracing::debug!("Ignoring retry while an operation is running");
            return PromptOutcome::Ignored;
        }
        self.dismiss_network_error();
        self.press().await
    }

    pub fn dismiss_network_error(&self) {
        self.ui.send_if_modified(|ui| ui.network_error.take().is_some());
    }

    fn route(&self, result: PasskeyAuthResult) -> PromptOutcome {
        match result {
            PasskeyAuthResult::Success(data) => {
                self.handler.on_success(&data);
                PromptOutcome::Succeeded
            }
            PasskeyAuthResult::Cancelled => {
                self.handler.on_cancel();
                PromptOutcome::Cancelled
            }
            PasskeyAuthResult::Failed(detail) if detail.code.is_retryable() => {
                let sheet = NetworkErrorSheet::new(detail.message, Some(detail.code));
                self.ui.send_modify(|ui| ui.network_error = Some(sheet));
                PromptOutcome::NetworkErrorShown
            }
            PasskeyAuthResult::Failed(detail) => {
                self.handler.on_error(&detail.message);
                PromptOutcome::Failed
            }
        }
    }
}
