//! Biometric prompt presentation adapter
//!
//! Turns the coordinator's state into what a biometric prompt screen shows,
//! triggers the passkey operation on press, and routes the outcome to a
//! [`PromptHandler`]. Network-class failures open a retry sheet instead of
//! reaching the error callback.

mod biometric_prompt;
mod types;

pub use biometric_prompt::BiometricPrompt;
pub use types::{NetworkErrorSheet, PromptHandler, PromptMode, PromptOutcome, PromptView};
