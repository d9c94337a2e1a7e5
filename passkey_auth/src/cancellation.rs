//! Detection of user-initiated cancellation of a passkey prompt
//!
//! Platform SDKs (iOS, Android, browser WebAuthn) phrase a dismissed prompt
//! differently, so cancellation is recognized by substring instead of by an
//! exact error code. Every operation goes through [`is_user_cancellation`].

use crate::backend::AuthFailure;

/// Lowercase substrings that mark a failure as a user cancellation.
pub const CANCELLATION_KEYWORDS: [&str; 4] = ["cancel", "abort", "user denied", "dismissed"];

/// Whether the failure was the user abandoning the prompt.
///
/// Returns false when there is no failure.
pub fn is_user_cancellation(failure: Option<&AuthFailure>) -> bool {
    failure.is_some_and(|f| is_cancellation_message(f.message()))
}

/// Whether a raw error message describes a user cancellation.
pub fn is_cancellation_message(message: &str) -> bool {
    let message = message.to_lowercase();
    CANCELLATION_KEYWORDS
        .iter()
        .any(|keyword| message.contains(keyword))
}
