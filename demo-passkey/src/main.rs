use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use passkey_auth::{AuthBackend, BiometricPrompt, HttpAuthBackend, PasskeyAuth, PromptOutcome};

mod simulated;

use crate::simulated::{
    BackendKind, DemoMode, LoggingHandler, Scenario, SimulatedAuthenticator, SimulatedBackend,
    SimulatedDevice,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let scenario = Scenario::from_env();
    let mode = DemoMode::from_env();
    let backend_kind = BackendKind::from_env();
    tracing::info!(
        "Running {:?} prompt with the {:?} scenario against the {:?} backend",
        mode,
        scenario,
        backend_kind
    );

    let backend: Arc<dyn AuthBackend> = match backend_kind {
        BackendKind::Simulated => Arc::new(SimulatedBackend::new(scenario)),
        BackendKind::Http => {
            let backend =
                HttpAuthBackend::from_env(Arc::new(SimulatedAuthenticator::new(scenario)))?;
            tracing::info!("Auth backend at {}", backend.base_url());
            Arc::new(backend)
        }
    };
    let auth = PasskeyAuth::new(Arc::new(SimulatedDevice::new(scenario)), backend);

    let mut updates = auth.subscribe();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            let json = serde_json::to_string(&state).unwrap_or_default();
            tracing::debug!("Passkey state: {}", json);
        }
    });

    let prompt = BiometricPrompt::new(auth, mode.prompt_mode(), LoggingHandler);
    prompt.mount().await;

    let view = prompt.view();
    tracing::info!("Prompt view:\n{}", serde_json::to_string_pretty(&view)?);
    if !prompt.auth().is_available() {
        tracing::warn!("Biometric authentication is not available on this device");
        return Ok(());
    }

    let mut outcome = prompt.press().await;
    if outcome == PromptOutcome::NetworkErrorShown {
        if let Some(sheet) = prompt.view().network_error {
            tracing::warn!(
                "{}: {} {}",
                sheet.title,
                sheet.message,
                sheet.code_line().unwrap_or_default()
            );
            tracing::info!("Pressing \"{}\"", sheet.retry_label);
        }
        outcome = prompt.retry().await;
    }
    tracing::info!("Prompt outcome: {:?}", outcome);

    if mode == DemoMode::Register && outcome == PromptOutcome::Succeeded {
        let count = prompt.auth().preload_passkeys().await;
        tracing::info!("Account now lists {} passkey(s)", count);
    }

    Ok(())
}
