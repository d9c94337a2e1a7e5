//! Boundary to the remote auth backend
//!
//! The backend is consumed through the [`AuthBackend`] trait. Its two error
//! shapes (a thrown [`BackendError`] and the `{error}` field of a resolved
//! sign-in result) are normalized into [`AuthFailure`] before the coordinator
//! branches on them.

mod errors;
mod failure;
mod http;
mod traits;
mod types;

pub use errors::BackendError;
pub use failure::AuthFailure;
pub use http::HttpAuthBackend;
pub use traits::{AuthBackend, PlatformAuthenticator};
pub use types::{
    AddPasskeyRequest, AddPasskeyResponse, AddedPasskey, AuthenticatorAttachment,
    BackendErrorBody, PasskeySummary, SessionInfo, SignInData, SignInPasskeyRequest,
    SignInPasskeyResponse, UserInfo,
};
