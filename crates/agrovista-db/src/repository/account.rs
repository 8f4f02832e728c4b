//! SurrealDB implementation of [`AccountRepository`].
//!
//! Accounts are keyed by a generated UUID with a UNIQUE index on
//! `email`, so a duplicate registration surfaces as a query error.
//! The password hash arrives pre-computed from the auth layer and the
//! recovery answer arrives pre-encrypted; this repository stores what
//! it is given.

use agrovista_core::error::AgroResult;
use agrovista_core::models::account::{Account, CreateAccount};
use agrovista_core::repository::AccountRepository;
use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct AccountRow {
    email: String,
    password_hash: String,
    recovery_answer: Option<String>,
    created_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct AccountRowWithId {
    record_id: String,
    email: String,
    password_hash: String,
    recovery_answer: Option<String>,
    created_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self, id: Uuid) -> Account {
        Account {
            id,
            email: self.email,
            password_hash: self.password_hash,
            recovery_answer: self.recovery_answer,
            created_at: self.created_at,
        }
    }
}

impl AccountRowWithId {
    fn try_into_account(self) -> Result<Account, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Corrupt(format!("invalid UUID: {e}")))?;
        Ok(Account {
            id,
            email: self.email,
            password_hash: self.password_hash,
            recovery_answer: self.recovery_answer,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the Account repository.
#[derive(Clone)]
pub struct SurrealAccountRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealAccountRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> AccountRepository for SurrealAccountRepository<C> {
    async fn create(&self, input: CreateAccount) -> AgroResult<Account> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('account', $id) SET \
                 email = $email, \
                 password_hash = $password_hash, \
                 recovery_answer = NONE",
            )
            .bind(("id", id_str.clone()))
            .bind(("email", input.email))
            .bind(("password_hash", input.password_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Corrupt(e.to_string()))?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: id_str,
        })?;

        Ok(row.into_account(id))
    }

    async fn set_recovery_answer(&self, email: &str, ciphertext: &str) -> AgroResult<()> {
        let mut result = self
            .db
            .query(
                "UPDATE account SET recovery_answer = $recovery_answer \
                 WHERE email = $email \
                 RETURN AFTER",
            )
            .bind(("email", email.to_string()))
            .bind(("recovery_answer", ciphertext.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "account".into(),
                id: format!("email={email}"),
            }
            .into());
        }

        Ok(())
    }

    async fn get_by_email(&self, email: &str) -> AgroResult<Account> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM account \
                 WHERE email = $email",
            )
            .bind(("email", email.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<AccountRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "account".into(),
            id: format!("email={email}"),
        })?;

        Ok(row.try_into_account()?)
    }
}
