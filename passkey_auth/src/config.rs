//! Central configuration for the passkey_auth crate

use std::{env, sync::LazyLock, time::Duration};

use crate::backend::AuthenticatorAttachment;

const DEFAULT_AUTH_URL: &str = "http://localhost:3050";
const DEFAULT_AUTH_BASE_PATH: &str = "/api/auth";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Origin of the remote auth backend.
///
/// Default: "http://localhost:3050"
pub static PASSKEY_AUTH_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("PASSKEY_AUTH_URL").unwrap_or_else(|_| DEFAULT_AUTH_URL.to_string())
});

/// Path under which the auth backend mounts its endpoints.
///
/// Default: "/api/auth"
pub static PASSKEY_AUTH_BASE_PATH: LazyLock<String> = LazyLock::new(|| {
    env::var("PASSKEY_AUTH_BASE_PATH").unwrap_or_else(|_| DEFAULT_AUTH_BASE_PATH.to_string())
});

/// Authenticator attachment requested when registering a passkey.
///
/// `None` lets the platform offer both platform and roaming authenticators.
pub static PASSKEY_AUTHENTICATOR_ATTACHMENT: LazyLock<Option<AuthenticatorAttachment>> =
    LazyLock::new(|| {
        parse_authenticator_attachment(env::var("PASSKEY_AUTHENTICATOR_ATTACHMENT").ok().as_deref())
    });

/// Request timeout of the HTTP client used by `HttpAuthBackend`.
pub static PASSKEY_HTTP_TIMEOUT: LazyLock<Duration> = LazyLock::new(|| {
    parse_timeout_secs(env::var("PASSKEY_HTTP_TIMEOUT").ok().as_deref())
});

pub(crate) fn parse_authenticator_attachment(
    value: Option<&str>,
) -> Option<AuthenticatorAttachment> {
    match value {
        None => Some(AuthenticatorAttachment::Platform),
        Some(v) => match v.to_lowercase().as_str() {
            "platform" => Some(AuthenticatorAttachment::Platform),
            "cross-platform" => Some(AuthenticatorAttachment::CrossPlatform),
            "none" => None,
            invalid => {
                tracing::warn!(
                    "Invalid authenticator attachment: {}. Using default 'platform'",
                    invalid
                );
                Some(AuthenticatorAttachment::Platform)
            }
        },
    }
}

pub(crate) fn parse_timeout_secs(value: Option<&str>) -> Duration {
    let secs = value
        .map(|v| v.parse::<u64>().unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS))
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Joins the auth origin and base path into the endpoint root used by the HTTP backend.
pub(crate) fn auth_endpoint_root(origin: &str, base_path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let base_path = base_path.trim_matches('/');
    if base_path.is_empty() {
        origin.to_string()
    } else {
        format!("{origin}/{base_path}")
    }
}
