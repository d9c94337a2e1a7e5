use async_trait::async_trait;

use super::errors::PlatformError;
use super::types::{AuthenticationType, PlatformOs};

/// Access to the device's local biometric SDK and device metadata.
///
/// Platform implementations wrap the native APIs:
/// - iOS: `LocalAuthentication` (`LAContext`)
/// - Android: `BiometricManager`
/// - Browser: user-verifying platform authenticator availability
#[async_trait]
pub trait BiometricPlatform: Send + Sync {
    /// Operating system of the device.
    fn os(&self) -> PlatformOs;

    /// Whether the device has biometric hardware.
    async fn has_hardware(&self) -> Result<bool, PlatformError>;

    /// Whether the user has enrolled at least one biometric.
    async fn is_enrolled(&self) -> Result<bool, PlatformError>;

    /// Modalities the device can authenticate with.
    async fn supported_authentication_types(
        &self,
    ) -> Result<Vec<AuthenticationType>, PlatformError>;

    /// User-assigned device name, e.g. "Alice's iPhone".
    fn device_name(&self) -> Option<String>;

    /// Marketing model name, e.g. "iPhone 14 Pro".
    fn model_name(&self) -> Option<String>;
}
