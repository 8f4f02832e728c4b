//! Database-specific error types and conversions.

use agrovista_core::error::AgroError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Stored record is corrupt: {0}")]
    Corrupt(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<DbError> for AgroError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => AgroError::NotFound { entity, id },
            other => AgroError::Database(other.to_string()),
        }
    }
}
