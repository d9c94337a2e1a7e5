//! Biometric capability detection
//!
//! Queries the device for biometric hardware, enrollment and supported
//! modality, and reduces the answers to a single [`BiometricType`].

mod detect;
mod errors;
mod platform;
mod types;

pub use detect::{classify_modalities, detect_biometric_type};
pub use errors::PlatformError;
pub use platform::BiometricPlatform;
pub use types::{AuthenticationType, BiometricType, PlatformOs};
