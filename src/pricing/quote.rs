//! Quote aggregation
//!
//! Drives the resolver and allocator once per calendar night of a stay
//! and sums the results into a total.

use crate::{
    error::{AppError, AppResult},
    models::{price_override::PriceOverride, settings::PricingConstants, stay::StayRequest},
};

use super::{allocator, resolver, Quote};

/// Compute a full quote for a stay.
///
/// Nights are iterated forward over `[check_in, check_out)` and each is
/// resolved independently, so prices and capacities may differ night to
/// night within the same stay. A zero or inverted range yields
/// [`Quote::empty`], which is not an error; callers use it to mean "no
/// valid stay selected yet".
pub fn compute_quote(
    stay: &StayRequest,
    overrides: &[PriceOverride],
    constants: &PricingConstants,
) -> AppResult<Quote> {
    let nights = stay.nights();
    if nights <= 0 {
        return Ok(Quote::empty());
    }

    let mut breakdown = Vec::with_capacity(nights as usize);
    let mut total: i64 = 0;

    for date in stay.check_in.iter_days().take(nights as usize) {
        let rate = resolver::night_rate(date, overrides, constants)?;
        let allocation = allocator::allocate(date, stay.guest_count, &rate, constants.total_rooms)?;

        total = total
            .checked_add(allocation.night_cost)
            .ok_or_else(|| AppError::Internal("stay total overflow".to_string()))?;
        breakdown.push(allocation);
    }

    let rooms = breakdown.first().map(|n| n.rooms_used).unwrap_or(0);

    Ok(Quote {
        nights,
        total,
        rooms,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::ResourceType;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).unwrap()
    }

    fn constants() -> PricingConstants {
        PricingConstants {
            room_price: 400_000,
            camping_price_per_person: 40_000,
            max_guests_per_room: 4,
            total_rooms: 5,
        }
    }

    fn room_override(d: u32, price: i64, max_guests: Option<i16>) -> PriceOverride {
        PriceOverride {
            id: 1,
            date: date(d),
            resource_type: ResourceType::Room.into(),
            price,
            max_guests,
            crea_date: None,
            modif_date: None,
        }
    }

    #[test]
    fn test_two_guests_two_nights() {
        let stay = StayRequest::new(date(10), date(12), 2);
        let quote = compute_quote(&stay, &[], &constants()).unwrap();
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.rooms, 1);
        assert_eq!(quote.total, 800_000);
        assert_eq!(quote.breakdown.len(), 2);
        assert!(quote.breakdown.iter().all(|n| n.camping_guests == 0));
        assert!(!quote.has_camping());
    }

    #[test]
    fn test_overflow_party_single_night() {
        // 22 guests against 5 rooms of 4: clamped to 5 rooms, 2 camp
        let stay = StayRequest::new(date(10), date(11), 22);
        let quote = compute_quote(&stay, &[], &constants()).unwrap();
        assert_eq!(quote.nights, 1);
        assert_eq!(quote.rooms, 5);
        assert_eq!(quote.total, 5 * 400_000 + 2 * 40_000);
        assert!(quote.has_camping());
    }

    #[test]
    fn test_override_night_differs_from_neighbours() {
        // Middle night doubles the price and halves the capacity
        let overrides = vec![room_override(11, 600_000, Some(2))];
        let stay = StayRequest::new(date(10), date(13), 4);
        let quote = compute_quote(&stay, &overrides, &constants()).unwrap();

        assert_eq!(quote.nights, 3);
        // Base nights: one room of four
        assert_eq!(quote.breakdown[0].rooms_used, 1);
        assert_eq!(quote.breakdown[0].night_cost, 400_000);
        assert_eq!(quote.breakdown[2].rooms_used, 1);
        assert_eq!(quote.breakdown[2].night_cost, 400_000);
        // Override night: two rooms of two at the override price
        assert_eq!(quote.breakdown[1].rooms_used, 2);
        assert_eq!(quote.breakdown[1].night_cost, 2 * 600_000);
        assert_eq!(quote.total, 400_000 + 2 * 600_000 + 400_000);
    }

    #[test]
    fn test_zero_night_range_is_not_an_error() {
        let stay = StayRequest::new(date(10), date(10), 2);
        let quote = compute_quote(&stay, &[], &constants()).unwrap();
        assert_eq!(quote, Quote::empty());
    }

    #[test]
    fn test_inverted_range_is_not_an_error() {
        let stay = StayRequest::new(date(12), date(10), 2);
        let quote = compute_quote(&stay, &[], &constants()).unwrap();
        assert_eq!(quote.nights, 0);
        assert_eq!(quote.total, 0);
    }

    #[test]
    fn test_idempotent() {
        let overrides = vec![room_override(11, 600_000, Some(2))];
        let stay = StayRequest::new(date(10), date(14), 7);
        let first = compute_quote(&stay, &overrides, &constants()).unwrap();
        let second = compute_quote(&stay, &overrides, &constants()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rooms_summary_is_first_night() {
        // First night capacity halved by override, so the summary figure
        // reflects the override, not the base constants
        let overrides = vec![room_override(10, 600_000, Some(2))];
        let stay = StayRequest::new(date(10), date(12), 4);
        let quote = compute_quote(&stay, &overrides, &constants()).unwrap();
        assert_eq!(quote.breakdown[0].rooms_used, 2);
        assert_eq!(quote.breakdown[1].rooms_used, 1);
        assert_eq!(quote.rooms, 2);
    }

    #[test]
    fn test_malformed_override_fails_whole_quote() {
        let overrides = vec![room_override(11, -1, None)];
        let stay = StayRequest::new(date(10), date(13), 2);
        let err = compute_quote(&stay, &overrides, &constants()).unwrap_err();
        assert!(matches!(err, AppError::MalformedOverride(_)));
    }

    #[test]
    fn test_invalid_capacity_fails_whole_quote() {
        let constants = PricingConstants {
            max_guests_per_room: 0,
            ..constants()
        };
        let stay = StayRequest::new(date(10), date(12), 2);
        let err = compute_quote(&stay, &[], &constants).unwrap_err();
        assert!(matches!(err, AppError::InvalidCapacityConfig(_)));
    }
}
