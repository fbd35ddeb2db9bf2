//! Repository layer for database operations

pub mod bookings;
pub mod overrides;
pub mod settings;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub overrides: overrides::PriceOverridesRepository,
    pub settings: settings::SettingsRepository,
    pub bookings: bookings::BookingsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            overrides: overrides::PriceOverridesRepository::new(pool.clone()),
            settings: settings::SettingsRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            pool,
        }
    }
}
