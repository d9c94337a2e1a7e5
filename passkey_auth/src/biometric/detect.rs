use super::errors::PlatformError;
use super::platform::BiometricPlatform;
use super::types::{AuthenticationType, BiometricType, PlatformOs};

/// Detects the biometric type usable on the device.
///
/// Short-circuits to [`BiometricType::None`] when the device has no hardware
/// or nothing is enrolled; the modality query is only made once both pass.
pub async fn detect_biometric_type<P>(platform: &P) -> Result<BiometricType, PlatformError>
where
    P: BiometricPlatform + ?Sized,
{
    if !platform.has_hardware().await? {
        tracing::debug!("No biometric hardware present");
        return Ok(BiometricType::None);
    }

    // Hardware without enrollment is not usable
    if !platform.is_enrolled().await? {
        tracing::debug!("Biometric hardware present but nothing enrolled");
        return Ok(BiometricType::None);
    }

    let supported = platform.supported_authentication_types().await?;
    let detected = classify_modalities(&supported, platform.os());

    tracing::debug!(
        "Supported modalities: {:?}, detected type: {}",
        supported,
        detected
    );
    Ok(detected)
}

/// Maps the supported modalities to a biometric type.
///
/// Facial recognition wins over fingerprint when both are reported.
pub fn classify_modalities(supported: &[AuthenticationType], os: PlatformOs) -> BiometricType {
    if supported.contains(&AuthenticationType::FacialRecognition) {
        BiometricType::FaceId
    } else if supported.contains(&AuthenticationType::Fingerprint) {
        match os {
            PlatformOs::Ios => BiometricType::TouchId,
            PlatformOs::Android | PlatformOs::Web => BiometricType::Fingerprint,
        }
    } else {
        BiometricType::None
    }
}
