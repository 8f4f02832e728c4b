//! Harvest record domain model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Crop types the dashboard accepts.
///
/// Persisted under their Spanish display labels, which is also how
/// the presentation layer renders them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Crop {
    Potato,
    Coffee,
    Corn,
}

impl Crop {
    /// Display and storage label.
    pub fn label(&self) -> &'static str {
        match self {
            Crop::Potato => "Papa",
            Crop::Coffee => "Café",
            Crop::Corn => "Maíz",
        }
    }

    pub fn from_label(label: &str) -> Option<Crop> {
        match label {
            "Papa" => Some(Crop::Potato),
            "Café" => Some(Crop::Coffee),
            "Maíz" => Some(Crop::Corn),
            _ => None,
        }
    }
}

/// A stored harvest entry.
///
/// `quantity` holds field-cipher ciphertext, never a plaintext number.
/// Records are append-only; there is no update or delete path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestRecord {
    pub id: Uuid,
    pub crop: Crop,
    /// Ciphertext of the decimal rendering of the submitted quantity.
    pub quantity: String,
    pub date: NaiveDate,
    /// Email of the submitting account. Not enforced as a foreign key.
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

/// Input for a harvest submission, quantity still in plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHarvest {
    pub crop: Crop,
    /// Kilograms, non-negative by construction.
    pub quantity: u32,
    pub date: NaiveDate,
    pub owner: String,
}
