//! Agrovista Auth — Argon2id password hashing and account
//! registration/login orchestration.

pub mod error;
pub mod password;
pub mod service;

pub use error::AuthError;
pub use service::{AccountService, RegisterInput};
