//! Error types for the Agrovista system.
//!
//! Two layers share one enum: the internal kinds (`NotFound`,
//! `Database`, `Crypto`) are produced by repositories
//! and the field cipher; the operation-level kinds (`Registration`,
//! `InvalidCredentials`, `Store`, `WeatherUnavailable`) are what the
//! services hand to the presentation layer. A service never lets an
//! internal kind escape its operation: it logs the cause and collapses
//! it into the operation's single reported outcome.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgroError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Cryptography error: {0}")]
    Crypto(String),

    /// Uniform registration failure; the cause is logged, not surfaced.
    #[error("Error al registrar")]
    Registration,

    /// Uniform login failure; the cause is logged, not surfaced.
    #[error("Credenciales inválidas")]
    InvalidCredentials,

    /// Uniform harvest-store failure.
    #[error("Error al registrar la cosecha")]
    Store,

    /// Uniform weather-fetch failure.
    #[error("Error al conectar con el servicio climático")]
    WeatherUnavailable,

    /// A view operation was invoked without an authenticated session.
    #[error("No hay sesión iniciada")]
    Unauthenticated,
}

pub type AgroResult<T> = Result<T, AgroError>;
