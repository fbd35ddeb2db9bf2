//! Bookings service
//!
//! Persists confirmed quotes as booking records and answers the
//! day-by-day room availability scan. The quote is always recomputed
//! here from the stored constants and overrides; totals arriving from
//! the outside are never trusted.

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{AvailabilityDay, Booking, BookingDetails, CreateBooking},
        stay::StayRequest,
    },
    repository::Repository,
};

use super::pricing::PricingService;

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    pricing: PricingService,
}

impl BookingsService {
    pub fn new(repository: Repository, pricing: PricingService) -> Self {
        Self { repository, pricing }
    }

    /// Create a booking from a submitted form
    pub async fn create_booking(&self, data: CreateBooking) -> AppResult<BookingDetails> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let check_in = parse_date(&data.check_in, "check_in")?;
        let check_out = parse_date(&data.check_out, "check_out")?;
        let stay = StayRequest::new(check_in, check_out, data.guest_count);

        let quote = self.pricing.quote(&stay).await?;
        if quote.nights == 0 {
            return Err(AppError::Validation(
                "Stay must cover at least one night".to_string(),
            ));
        }

        let booking = self.repository.bookings.create(&data, &stay, &quote).await?;
        tracing::info!(
            "Booking {} created: {} to {}, {} guests, total {}",
            booking.id,
            booking.check_in,
            booking.check_out,
            booking.guest_count,
            booking.total
        );
        Ok(details(booking))
    }

    /// Get a booking with its display total
    pub async fn get_booking(&self, id: i32) -> AppResult<BookingDetails> {
        let booking = self.repository.bookings.get_by_id(id).await?;
        Ok(details(booking))
    }

    /// Most recent bookings for the admin dashboard
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list_recent(limit).await
    }

    /// Day-by-day room availability over `[from, to)`.
    ///
    /// Rooms left can reach zero but the range is never rejected:
    /// camping absorbs demand beyond the room ceiling.
    pub async fn availability(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<AvailabilityDay>> {
        let nights = (to - from).num_days();
        if nights <= 0 {
            return Ok(Vec::new());
        }

        let constants = self.pricing.constants().await?;
        let bookings = self.repository.bookings.overlapping(from, to).await?;

        let days = from
            .iter_days()
            .take(nights as usize)
            .map(|date| {
                let rooms_booked: i64 = bookings
                    .iter()
                    .filter(|b| b.check_in <= date && date < b.check_out)
                    .map(|b| i64::from(b.rooms))
                    .sum();
                AvailabilityDay {
                    date,
                    rooms_booked,
                    rooms_left: (i64::from(constants.total_rooms) - rooms_booked).max(0),
                }
            })
            .collect();
        Ok(days)
    }
}

fn details(booking: Booking) -> BookingDetails {
    BookingDetails {
        total_display: format_amount(booking.total),
        booking,
    }
}

fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid {} date", field)))
}

/// Format a whole-currency-unit amount with thousands separators
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    if amount < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1_000), "1.000");
        assert_eq!(format_amount(400_000), "400.000");
        assert_eq!(format_amount(2_080_000), "2.080.000");
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2025-07-10", "check_in").is_ok());
        assert!(parse_date("10/07/2025", "check_in").is_err());
        assert!(parse_date("", "check_out").is_err());
    }
}
