//! SurrealDB implementation of [`HarvestRepository`].
//!
//! The quantity field is encrypted with the injected [`FieldCipher`]
//! before the CREATE statement is issued, so plaintext quantities
//! never cross the process boundary. Crop, date, and owner are stored
//! in plaintext. The table carries no uniqueness constraint, so a
//! resubmitted entry becomes a second record.

use std::sync::Arc;

use agrovista_cipher::FieldCipher;
use agrovista_core::error::{AgroError, AgroResult};
use agrovista_core::models::harvest::{Crop, HarvestRecord, NewHarvest};
use agrovista_core::repository::HarvestRepository;
use chrono::{DateTime, NaiveDate, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct HarvestRow {
    crop: String,
    quantity: String,
    date: String,
    owner: String,
    created_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct HarvestRowWithId {
    record_id: String,
    crop: String,
    quantity: String,
    date: String,
    owner: String,
    created_at: DateTime<Utc>,
}

fn parse_crop(label: &str) -> Result<Crop, DbError> {
    Crop::from_label(label)
        .ok_or_else(|| DbError::Corrupt(format!("unknown crop label: {label}")))
}

fn parse_date(s: &str) -> Result<NaiveDate, DbError> {
    s.parse::<NaiveDate>()
        .map_err(|e| DbError::Corrupt(format!("invalid harvest date '{s}': {e}")))
}

impl HarvestRow {
    fn into_record(self, id: Uuid) -> Result<HarvestRecord, DbError> {
        Ok(HarvestRecord {
            id,
            crop: parse_crop(&self.crop)?,
            quantity: self.quantity,
            date: parse_date(&self.date)?,
            owner: self.owner,
            created_at: self.created_at,
        })
    }
}

impl HarvestRowWithId {
    fn try_into_record(self) -> Result<HarvestRecord, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Corrupt(format!("invalid UUID: {e}")))?;
        Ok(HarvestRecord {
            id,
            crop: parse_crop(&self.crop)?,
            quantity: self.quantity,
            date: parse_date(&self.date)?,
            owner: self.owner,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the Harvest repository.
#[derive(Clone)]
pub struct SurrealHarvestRepository<C: Connection> {
    db: Surreal<C>,
    cipher: Arc<FieldCipher>,
}

impl<C: Connection> SurrealHarvestRepository<C> {
    pub fn new(db: Surreal<C>, cipher: Arc<FieldCipher>) -> Self {
        Self { db, cipher }
    }
}

impl<C: Connection> HarvestRepository for SurrealHarvestRepository<C> {
    async fn append(&self, input: NewHarvest) -> AgroResult<HarvestRecord> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let quantity = self
            .cipher
            .encrypt(&input.quantity.to_string())
            .map_err(|e| AgroError::Crypto(e.to_string()))?;

        let result = self
            .db
            .query(
                "CREATE type::record('harvest', $id) SET \
                 crop = $crop, \
                 quantity = $quantity, \
                 date = $date, \
                 owner = $owner",
            )
            .bind(("id", id_str.clone()))
            .bind(("crop", input.crop.label().to_string()))
            .bind(("quantity", quantity))
            .bind(("date", input.date.to_string()))
            .bind(("owner", input.owner))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Corrupt(e.to_string()))?;

        let rows: Vec<HarvestRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "harvest".into(),
            id: id_str,
        })?;

        Ok(row.into_record(id)?)
    }

    async fn list_by_owner(&self, owner: &str) -> AgroResult<Vec<HarvestRecord>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM harvest \
                 WHERE owner = $owner \
                 ORDER BY created_at ASC",
            )
            .bind(("owner", owner.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<HarvestRowWithId> = result.take(0).map_err(DbError::from)?;

        let records = rows
            .into_iter()
            .map(|row| row.try_into_record())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(records)
    }
}
