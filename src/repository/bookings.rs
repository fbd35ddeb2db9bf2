//! Bookings repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, CreateBooking},
        stay::StayRequest,
    },
    pricing::Quote,
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Most recent bookings first
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings ORDER BY crea_date DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Bookings whose night range intersects `[from, to)`, cancelled
    /// excluded
    pub async fn overlapping(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE check_in < $2 AND check_out > $1 AND status != 'cancelled'
            ORDER BY check_in
            "#,
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Persist a booking with its computed quote
    pub async fn create(
        &self,
        data: &CreateBooking,
        stay: &StayRequest,
        quote: &Quote,
    ) -> AppResult<Booking> {
        let row = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                guest_name, phone, check_in, check_out,
                guest_count, nights, rooms, total, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending')
            RETURNING *
            "#,
        )
        .bind(&data.guest_name)
        .bind(&data.phone)
        .bind(stay.check_in)
        .bind(stay.check_out)
        .bind(stay.guest_count)
        .bind(quote.nights as i32)
        .bind(quote.rooms)
        .bind(quote.total)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }
}
