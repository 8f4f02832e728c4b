//! Integration tests for the Account repository implementation using
//! in-memory SurrealDB.

use agrovista_core::models::account::CreateAccount;
use agrovista_core::repository::AccountRepository;
use agrovista_db::repository::SurrealAccountRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    agrovista_db::run_migrations(&db).await.unwrap();
    db
}

fn create_input(email: &str) -> CreateAccount {
    CreateAccount {
        email: email.into(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$PLACEHOLDERHASH".into(),
    }
}

#[tokio::test]
async fn create_and_get_account() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let account = repo.create(create_input("ana@finca.co")).await.unwrap();
    assert_eq!(account.email, "ana@finca.co");
    assert!(account.recovery_answer.is_none());

    let fetched = repo.get_by_email("ana@finca.co").await.unwrap();
    assert_eq!(fetched.id, account.id);
    assert_eq!(fetched.password_hash, account.password_hash);
}

#[tokio::test]
async fn duplicate_email_rejected() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    repo.create(create_input("ana@finca.co")).await.unwrap();
    let result = repo.create(create_input("ana@finca.co")).await;
    assert!(result.is_err(), "duplicate email should be rejected");
}

#[tokio::test]
async fn unknown_email_is_not_found() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let result = repo.get_by_email("nadie@finca.co").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn recovery_answer_is_stored_verbatim() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    repo.create(create_input("ana@finca.co")).await.unwrap();
    repo.set_recovery_answer("ana@finca.co", "b64-ciphertext-blob")
        .await
        .unwrap();

    let fetched = repo.get_by_email("ana@finca.co").await.unwrap();
    assert_eq!(fetched.recovery_answer.as_deref(), Some("b64-ciphertext-blob"));
}

#[tokio::test]
async fn recovery_answer_for_unknown_account_fails() {
    let db = setup().await;
    let repo = SurrealAccountRepository::new(db);

    let result = repo.set_recovery_answer("nadie@finca.co", "blob").await;
    assert!(result.is_err());
}
