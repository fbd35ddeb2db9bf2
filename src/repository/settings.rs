//! Settings repository (key-value pricing settings)

use std::collections::HashMap;

use sqlx::{Pool, Postgres};

use crate::{
    config::PricingDefaults,
    error::{AppError, AppResult},
    models::settings::{keys, PricingConstants},
};

#[derive(Clone)]
pub struct SettingsRepository {
    pool: Pool<Postgres>,
}

impl SettingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Read all settings rows into a key-value map
    pub async fn values(&self) -> AppResult<HashMap<String, i64>> {
        let rows = sqlx::query_as::<_, (String, i64)>("SELECT key, value FROM pricing_settings")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().collect())
    }

    /// Assemble the pricing constants, filling missing keys from the
    /// configured defaults
    pub async fn constants(&self, defaults: &PricingDefaults) -> AppResult<PricingConstants> {
        let values = self.values().await?;

        Ok(PricingConstants {
            room_price: values
                .get(keys::ROOM_PRICE)
                .copied()
                .unwrap_or(defaults.room_price),
            camping_price_per_person: values
                .get(keys::CAMPING_PRICE_PER_PERSON)
                .copied()
                .unwrap_or(defaults.camping_price_per_person),
            max_guests_per_room: narrow(&values, keys::MAX_GUESTS_PER_ROOM, defaults.max_guests_per_room)?,
            total_rooms: narrow(&values, keys::TOTAL_ROOMS, defaults.total_rooms)?,
        })
    }

    /// Upsert one settings key
    pub async fn set(&self, key: &str, value: i64) -> AppResult<()> {
        // Try to update the existing row first
        let rows_affected = sqlx::query("UPDATE pricing_settings SET value = $2 WHERE key = $1")
            .bind(key)
            .bind(value)
            .execute(&self.pool)
            .await?
            .rows_affected();

        // If no row was updated, insert a new one
        if rows_affected == 0 {
            sqlx::query("INSERT INTO pricing_settings (key, value) VALUES ($1, $2)")
                .bind(key)
                .bind(value)
                .execute(&self.pool)
                .await?;
        }
        Ok(())
    }
}

/// Narrow a stored counter to i16 without silently truncating; a value
/// outside the range means the settings row is corrupt.
fn narrow(values: &HashMap<String, i64>, key: &str, default: i16) -> AppResult<i16> {
    match values.get(key) {
        None => Ok(default),
        Some(v) => i16::try_from(*v)
            .map_err(|_| AppError::Internal(format!("setting {} out of range: {}", key, v))),
    }
}
