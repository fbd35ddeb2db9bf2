//! Booking model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Booking record from database
///
/// `nights`, `rooms` and `total` are the engine's quote at creation time;
/// the status workflow (confirmation, cancellation) is handled by the
/// booking-management side and only read here to exclude cancelled rows
/// from the availability scan.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: i32,
    pub guest_name: String,
    pub phone: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guest_count: i32,
    pub nights: i32,
    /// Rooms used on the first night
    pub rooms: i16,
    /// Total for the whole stay, in whole currency units
    pub total: i64,
    pub status: String,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create booking request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBooking {
    #[validate(length(min = 1, max = 120))]
    pub guest_name: String,
    #[validate(length(min = 6, max = 32))]
    pub phone: String,
    /// Check-in date (YYYY-MM-DD)
    pub check_in: String,
    /// Check-out date (YYYY-MM-DD)
    pub check_out: String,
    #[validate(range(min = 1, max = 30))]
    pub guest_count: i32,
}

/// Booking with display fields for the confirmation page
#[derive(Debug, Clone, Serialize)]
pub struct BookingDetails {
    #[serde(flatten)]
    pub booking: Booking,
    /// Total formatted as a currency string
    pub total_display: String,
}

/// One night of the availability scan
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AvailabilityDay {
    pub date: NaiveDate,
    /// Rooms already taken by overlapping bookings
    pub rooms_booked: i64,
    /// Rooms still free that night (camping is always open)
    pub rooms_left: i64,
}
