//! Account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered dashboard user.
///
/// Accounts are write-once: created at registration, the recovery
/// answer is filled in by a second write, and nothing mutates or
/// deletes them afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    /// Unique across all accounts.
    pub email: String,
    /// Argon2id PHC-format hash. The raw password never reaches storage.
    pub password_hash: String,
    /// Field-cipher ciphertext of the recovery answer, once stored.
    pub recovery_answer: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    pub email: String,
    /// Already hashed; hashing happens in the auth layer.
    pub password_hash: String,
}
