use thiserror::Error;

/// Errors thrown by an [`AuthBackend`](super::AuthBackend) call.
///
/// The display form is the bare message so it can be surfaced to the user
/// unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Transport-level failure (connection refused, timeout, TLS)
    #[error("{0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The native passkey ceremony failed or was dismissed
    #[error("{0}")]
    Authenticator(String),

    /// The backend answered with a body that could not be decoded
    #[error("{0}")]
    InvalidResponse(String),

    /// The backend rejected the operation
    #[error("{0}")]
    Rejected(String),

    /// The backend client is misconfigured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BackendError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::Network(msg) => tracing::error!("Backend network error: {}", msg),
            Self::Http { status, message } => {
                tracing::error!("Backend HTTP error {}: {}", status, message)
            }
            Self::Authenticator(msg) => tracing::debug!("Authenticator error: {}", msg),
            Self::InvalidResponse(msg) => tracing::error!("Invalid backend response: {}", msg),
            Self::Rejected(msg) => tracing::error!("Backend rejected request: {}", msg),
            Self::Config(msg) => tracing::error!("Backend configuration error: {}", msg),
        }
        self
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries user input (the passkey label) and must not
        // reach the message shown to the user or the cancellation check
        if let Some(url) = err.url() {
            tracing::debug!("Request to {} failed", url.path());
        }
        let err = err.without_url();
        if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
