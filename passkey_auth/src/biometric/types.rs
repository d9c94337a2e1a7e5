use serde::{Deserialize, Serialize};
use std::fmt;

/// Biometric authentication type available on the device.
///
/// Derived from the platform on every availability check, never persisted.
/// `TouchId` and `Fingerprint` share the same hardware modality and differ
/// only by platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BiometricType {
    FaceId,
    TouchId,
    Fingerprint,
    #[default]
    None,
}

impl BiometricType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FaceId => "faceId",
            Self::TouchId => "touchId",
            Self::Fingerprint => "fingerprint",
            Self::None => "none",
        }
    }

    /// Whether this type represents a usable biometric.
    pub fn is_available(self) -> bool {
        self != Self::None
    }

    /// Human readable name shown in prompts.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::FaceId => "Face ID",
            Self::TouchId => "Touch ID",
            Self::Fingerprint => "Fingerprint",
            Self::None => "Biometric",
        }
    }

    /// Icon glyph used by the prompt.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::FaceId => "scan",
            Self::TouchId | Self::Fingerprint => "finger-print",
            Self::None => "shield-checkmark",
        }
    }
}

impl fmt::Display for BiometricType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication modality constants reported by the platform SDK.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticationType {
    Fingerprint = 1,
    FacialRecognition = 2,
    Iris = 3,
}

impl TryFrom<u8> for AuthenticationType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Fingerprint),
            2 => Ok(Self::FacialRecognition),
            3 => Ok(Self::Iris),
            other => Err(other),
        }
    }
}

/// Operating system the client runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformOs {
    Ios,
    Android,
    Web,
}

impl PlatformOs {
    /// Label used for a new passkey when the device reports no name at all.
    pub fn default_device_label(self) -> &'static str {
        match self {
            Self::Ios => "iPhone",
            Self::Android | Self::Web => "Android Device",
        }
    }
}
