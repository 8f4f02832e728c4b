//! Account service — registration and login orchestration.

use std::sync::Arc;

use agrovista_cipher::FieldCipher;
use agrovista_core::error::{AgroError, AgroResult};
use agrovista_core::models::account::{Account, CreateAccount};
use agrovista_core::models::session::Session;
use agrovista_core::repository::AccountRepository;
use tracing::warn;

use crate::password;

/// Input for the registration flow.
#[derive(Debug)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    /// Recovery answer in plaintext ("name of your first farm");
    /// encrypted before it leaves the process.
    pub recovery_answer: String,
}

/// Account service.
///
/// Generic over the repository implementation so that this layer has
/// no dependency on the database crate. The field cipher is injected
/// at construction time.
pub struct AccountService<R: AccountRepository> {
    accounts: R,
    cipher: Arc<FieldCipher>,
    /// Optional server-side pepper for password hashing.
    pepper: Option<String>,
}

impl<R: AccountRepository> AccountService<R> {
    pub fn new(accounts: R, cipher: Arc<FieldCipher>) -> Self {
        Self {
            accounts,
            cipher,
            pepper: None,
        }
    }

    pub fn with_pepper(accounts: R, cipher: Arc<FieldCipher>, pepper: String) -> Self {
        Self {
            accounts,
            cipher,
            pepper: Some(pepper),
        }
    }

    /// Register a new account and store its encrypted recovery answer.
    ///
    /// Two writes: the identity record first, then the recovery field.
    /// Every underlying failure (duplicate email, store fault, cipher
    /// fault) collapses into the same uniform error; the cause only
    /// goes to the log.
    pub async fn register(&self, input: RegisterInput) -> AgroResult<Account> {
        let result = self.register_inner(input).await;
        result.map_err(|e| {
            warn!(error = %e, "registration failed");
            AgroError::Registration
        })
    }

    async fn register_inner(&self, input: RegisterInput) -> AgroResult<Account> {
        let password_hash = password::hash_password(&input.password, self.pepper.as_deref())?;

        let account = self
            .accounts
            .create(CreateAccount {
                email: input.email,
                password_hash,
            })
            .await?;

        let ciphertext = self
            .cipher
            .encrypt(&input.recovery_answer)
            .map_err(|e| AgroError::Crypto(e.to_string()))?;
        self.accounts
            .set_recovery_answer(&account.email, &ciphertext)
            .await?;

        Ok(account)
    }

    /// Authenticate a user and return a session bound to their email.
    ///
    /// Succeeds on account existence alone: the supplied password is
    /// not checked against the stored hash. Any lookup failure
    /// collapses into the same uniform error, and the caller's session
    /// state is left for the caller to manage.
    pub async fn login(&self, email: &str, _password: &str) -> AgroResult<Session> {
        match self.accounts.get_by_email(email).await {
            Ok(account) => Ok(Session::authenticated(account.email)),
            Err(e) => {
                warn!(email, error = %e, "login failed");
                Err(AgroError::InvalidCredentials)
            }
        }
    }
}
