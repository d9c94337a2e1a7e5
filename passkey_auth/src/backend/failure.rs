use super::errors::BackendError;
use super::types::BackendErrorBody;

/// Backend failure normalized at the boundary.
///
/// A call either throws (`Thrown`) or resolves with an error payload
/// (`Resolved`). Both carry the human readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    Thrown {
        message: String,
    },
    Resolved {
        code: Option<String>,
        message: String,
    },
}

impl AuthFailure {
    pub fn message(&self) -> &str {
        match self {
            Self::Thrown { message } | Self::Resolved { message, .. } => message,
        }
    }

    pub fn is_thrown(&self) -> bool {
        matches!(self, Self::Thrown { .. })
    }

    /// Message, or `fallback` when the backend supplied an empty one.
    pub(crate) fn message_or(&self, fallback: &str) -> String {
        let message = self.message().trim();
        if message.is_empty() {
            fallback.to_string()
        } else {
            message.to_string()
        }
    }
}

impl From<BackendError> for AuthFailure {
    fn from(err: BackendError) -> Self {
        Self::Thrown {
            message: err.to_string(),
        }
    }
}

impl From<BackendErrorBody> for AuthFailure {
    fn from(body: BackendErrorBody) -> Self {
        Self::Resolved {
            code: body.code,
            message: body.message,
        }
    }
}
