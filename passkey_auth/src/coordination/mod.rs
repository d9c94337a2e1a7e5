//! Passkey operation coordination
//!
//! [`PasskeyAuth`] owns the observable authentication state of one consumer
//! (typically one screen) and exposes availability detection, passkey
//! registration and passkey sign-in. Every operation resolves to a state
//! update or a [`PasskeyAuthResult`]; none of them returns an error.

mod passkey;
mod passkey_auth;
mod types;

pub use passkey_auth::PasskeyAuth;
pub use types::{
    ErrorCode, PasskeyAuthResult, PasskeyAuthState, PasskeyData, PasskeyErrorDetail,
    RegisterPasskeyOptions,
};
