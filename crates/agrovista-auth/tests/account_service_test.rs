//! Integration tests for the account service against in-memory
//! SurrealDB.

use std::sync::Arc;

use agrovista_auth::service::{AccountService, RegisterInput};
use agrovista_cipher::FieldCipher;
use agrovista_core::error::AgroError;
use agrovista_core::repository::AccountRepository;
use agrovista_db::repository::SurrealAccountRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

const TEST_KEY: [u8; 32] = [7u8; 32];

/// Spin up in-memory DB, run migrations, build the service.
async fn setup() -> (
    AccountService<SurrealAccountRepository<surrealdb::engine::local::Db>>,
    SurrealAccountRepository<surrealdb::engine::local::Db>,
) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    agrovista_db::run_migrations(&db).await.unwrap();

    let repo = SurrealAccountRepository::new(db.clone());
    let cipher = Arc::new(FieldCipher::new(&TEST_KEY));
    (
        AccountService::new(SurrealAccountRepository::new(db), cipher),
        repo,
    )
}

fn register_input(email: &str) -> RegisterInput {
    RegisterInput {
        email: email.into(),
        password: "correct-horse-battery".into(),
        recovery_answer: "La Esperanza".into(),
    }
}

#[tokio::test]
async fn register_happy_path() {
    let (svc, repo) = setup().await;

    let account = svc.register(register_input("ana@finca.co")).await.unwrap();
    assert_eq!(account.email, "ana@finca.co");
    assert!(account.password_hash.starts_with("$argon2id$"));

    // Recovery answer lands encrypted, and decrypts with the same key.
    let stored = repo.get_by_email("ana@finca.co").await.unwrap();
    let ciphertext = stored.recovery_answer.expect("recovery answer stored");
    assert_ne!(ciphertext, "La Esperanza");
    let cipher = FieldCipher::new(&TEST_KEY);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "La Esperanza");
}

#[tokio::test]
async fn duplicate_registration_fails_uniformly() {
    let (svc, _repo) = setup().await;

    svc.register(register_input("ana@finca.co")).await.unwrap();
    let err = svc
        .register(register_input("ana@finca.co"))
        .await
        .unwrap_err();
    assert!(matches!(err, AgroError::Registration));
}

#[tokio::test]
async fn login_succeeds_for_registered_email() {
    let (svc, _repo) = setup().await;
    svc.register(register_input("ana@finca.co")).await.unwrap();

    let session = svc.login("ana@finca.co", "correct-horse-battery").await.unwrap();
    assert!(session.is_authenticated());
    assert_eq!(session.user(), Some("ana@finca.co"));
}

#[tokio::test]
async fn login_ignores_the_supplied_password() {
    // Observed contract: login checks account existence by email only.
    let (svc, _repo) = setup().await;
    svc.register(register_input("ana@finca.co")).await.unwrap();

    let session = svc.login("ana@finca.co", "not-her-password").await.unwrap();
    assert!(session.is_authenticated());
}

#[tokio::test]
async fn login_fails_uniformly_for_unknown_email() {
    let (svc, _repo) = setup().await;

    let err = svc.login("nadie@finca.co", "whatever").await.unwrap_err();
    assert!(matches!(err, AgroError::InvalidCredentials));
}

#[tokio::test]
async fn password_is_never_stored_in_plaintext() {
    let (svc, repo) = setup().await;
    svc.register(register_input("ana@finca.co")).await.unwrap();

    let stored = repo.get_by_email("ana@finca.co").await.unwrap();
    assert!(!stored.password_hash.contains("correct-horse-battery"));
}
