//! Integration tests for the Harvest repository implementation using
//! in-memory SurrealDB.
//!
//! The interesting property here is encryption at rest: the stored
//! quantity must be ciphertext that decrypts back to the submitted
//! number, while crop, date, and owner stay readable.

use std::sync::Arc;

use agrovista_cipher::FieldCipher;
use agrovista_core::models::harvest::{Crop, NewHarvest};
use agrovista_core::repository::HarvestRepository;
use agrovista_db::repository::SurrealHarvestRepository;
use chrono::NaiveDate;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

const TEST_KEY: [u8; 32] = [42u8; 32];

async fn setup() -> SurrealHarvestRepository<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    agrovista_db::run_migrations(&db).await.unwrap();
    SurrealHarvestRepository::new(db, Arc::new(FieldCipher::new(&TEST_KEY)))
}

fn potato_entry(owner: &str) -> NewHarvest {
    NewHarvest {
        crop: Crop::Potato,
        quantity: 500,
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        owner: owner.into(),
    }
}

#[tokio::test]
async fn quantity_is_encrypted_at_rest_and_decrypts_back() {
    let repo = setup().await;

    let record = repo.append(potato_entry("ana@finca.co")).await.unwrap();

    // Stored quantity is ciphertext, not the submitted number.
    assert_ne!(record.quantity, "500");

    let cipher = FieldCipher::new(&TEST_KEY);
    assert_eq!(cipher.decrypt(&record.quantity).unwrap(), "500");

    // The other fields are stored in plaintext.
    assert_eq!(record.crop, Crop::Potato);
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(record.owner, "ana@finca.co");
}

#[tokio::test]
async fn wrong_key_cannot_read_stored_quantity() {
    let repo = setup().await;
    let record = repo.append(potato_entry("ana@finca.co")).await.unwrap();

    let other = FieldCipher::new(&[99u8; 32]);
    assert!(other.decrypt(&record.quantity).is_err());
}

#[tokio::test]
async fn resubmission_creates_a_duplicate_record() {
    let repo = setup().await;

    let first = repo.append(potato_entry("ana@finca.co")).await.unwrap();
    let second = repo.append(potato_entry("ana@finca.co")).await.unwrap();
    assert_ne!(first.id, second.id);

    let records = repo.list_by_owner("ana@finca.co").await.unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn list_is_scoped_to_owner() {
    let repo = setup().await;

    repo.append(potato_entry("ana@finca.co")).await.unwrap();
    repo.append(NewHarvest {
        crop: Crop::Coffee,
        quantity: 120,
        date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
        owner: "luis@finca.co".into(),
    })
    .await
    .unwrap();

    let records = repo.list_by_owner("luis@finca.co").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].crop, Crop::Coffee);
    assert_eq!(records[0].owner, "luis@finca.co");
}

#[tokio::test]
async fn all_crop_labels_are_storable() {
    let repo = setup().await;

    for (crop, qty) in [(Crop::Potato, 500), (Crop::Coffee, 120), (Crop::Corn, 80)] {
        let record = repo
            .append(NewHarvest {
                crop,
                quantity: qty,
                date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                owner: "ana@finca.co".into(),
            })
            .await
            .unwrap();
        assert_eq!(record.crop, crop);
    }

    let records = repo.list_by_owner("ana@finca.co").await.unwrap();
    assert_eq!(records.len(), 3);
}
