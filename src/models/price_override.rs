//! Price override model (admin-defined exception days)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::enums::ResourceType;

/// Price override record
///
/// At most one override exists per `(date, resource_type)` pair; the
/// repository upsert enforces the key. An override applies to exactly one
/// night and supersedes the base constants for that night only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PriceOverride {
    pub id: i32,
    /// Night the override applies to
    pub date: NaiveDate,
    /// Resource (0=room, 1=camping)
    pub resource_type: i16,
    /// Price for that night, in whole currency units
    pub price: i64,
    /// Per-room guest capacity for that night; only meaningful for rooms,
    /// NULL falls back to the base capacity
    pub max_guests: Option<i16>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

impl PriceOverride {
    pub fn resource(&self) -> ResourceType {
        ResourceType::from(self.resource_type)
    }
}

/// Upsert override request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertPriceOverride {
    /// Night (YYYY-MM-DD)
    pub date: String,
    pub resource_type: ResourceType,
    #[validate(range(min = 1))]
    pub price: i64,
    #[validate(range(min = 1))]
    pub max_guests: Option<i16>,
}
