//! Agrovista Core — Domain models, errors, and repository traits.
//!
//! These are the core types shared across all crates. Nothing in this
//! crate performs I/O; storage and transport live in the sibling
//! crates.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{AgroError, AgroResult};
