//! Price overrides repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::ResourceType,
        price_override::{PriceOverride, UpsertPriceOverride},
    },
};

#[derive(Clone)]
pub struct PriceOverridesRepository {
    pool: Pool<Postgres>,
}

impl PriceOverridesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all overrides, date-ordered. The set is small (admin-managed
    /// exception days), so it is always fetched wholesale and filtered in
    /// memory by the pricing engine.
    pub async fn list(&self) -> AppResult<Vec<PriceOverride>> {
        let rows = sqlx::query_as::<_, PriceOverride>(
            "SELECT * FROM price_overrides ORDER BY date, resource_type",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get the override for one date and resource, if any
    pub async fn get(
        &self,
        date: NaiveDate,
        resource: ResourceType,
    ) -> AppResult<Option<PriceOverride>> {
        let row = sqlx::query_as::<_, PriceOverride>(
            "SELECT * FROM price_overrides WHERE date = $1 AND resource_type = $2",
        )
        .bind(date)
        .bind(i16::from(resource))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Upsert an override on its `(date, resource_type)` key
    pub async fn upsert(&self, data: &UpsertPriceOverride) -> AppResult<PriceOverride> {
        let date = NaiveDate::parse_from_str(&data.date, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid override date".to_string()))?;

        // Try to update the existing record first
        let updated = sqlx::query_as::<_, PriceOverride>(
            r#"
            UPDATE price_overrides
            SET price = $3, max_guests = $4, modif_date = NOW()
            WHERE date = $1 AND resource_type = $2
            RETURNING *
            "#,
        )
        .bind(date)
        .bind(i16::from(data.resource_type))
        .bind(data.price)
        .bind(data.max_guests)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = updated {
            return Ok(row);
        }

        // No row for that date and resource yet, insert a new one. A
        // concurrent upsert can win the race on the unique key between
        // our update and insert; report it as a conflict.
        let row = sqlx::query_as::<_, PriceOverride>(
            r#"
            INSERT INTO price_overrides (date, resource_type, price, max_guests)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(date)
        .bind(i16::from(data.resource_type))
        .bind(data.price)
        .bind(data.max_guests)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(
                format!("Override for {} {} already exists", date, data.resource_type),
            ),
            _ => AppError::from(e),
        })?;
        Ok(row)
    }

    /// Delete an override by ID
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM price_overrides WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Override {} not found", id)));
        }
        Ok(())
    }
}
