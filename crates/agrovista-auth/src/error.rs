//! Authentication error types.
//!
//! The user-facing registration/login failures are the uniform kinds
//! in [`agrovista_core::error::AgroError`]; this crate only adds the
//! cryptography failures its hashing layer can produce.

use agrovista_core::error::AgroError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for AgroError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Crypto(msg) => AgroError::Crypto(msg),
        }
    }
}
