use thiserror::Error;

/// Errors reported by the platform biometric SDK.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// A platform API call failed
    #[error("{0}")]
    Api(String),

    /// The biometric SDK is not present on this platform
    #[error("Biometric authentication is not supported on this platform")]
    Unsupported,
}
