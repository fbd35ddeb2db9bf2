//! Override resolution
//!
//! Looks up the effective prices and room capacity for a single night.
//! Absence of an override is the normal path and falls back to the base
//! constants; a present override supersedes them for that night only.

use chrono::NaiveDate;

use crate::{
    error::{AppError, AppResult},
    models::{enums::ResourceType, price_override::PriceOverride, settings::PricingConstants},
};

use super::NightRate;

/// Resolve the effective rate for one night.
///
/// Lookup is by exact calendar date and resource type. Malformed override
/// records (non-positive price, or a non-positive room capacity) abort
/// the quote rather than being substituted with base values, since the
/// result prices a real booking.
pub fn night_rate(
    date: NaiveDate,
    overrides: &[PriceOverride],
    constants: &PricingConstants,
) -> AppResult<NightRate> {
    let room = find(date, ResourceType::Room, overrides)?;
    let camping = find(date, ResourceType::Camping, overrides)?;

    let room_price = room.map(|o| o.price).unwrap_or(constants.room_price);
    let camping_price_per_person = camping
        .map(|o| o.price)
        .unwrap_or(constants.camping_price_per_person);

    // Per-room capacity only comes from room overrides; a camping
    // override's max_guests column carries no meaning.
    let max_guests_per_room = room
        .and_then(|o| o.max_guests)
        .unwrap_or(constants.max_guests_per_room);

    Ok(NightRate {
        room_price,
        camping_price_per_person,
        max_guests_per_room,
    })
}

fn find(
    date: NaiveDate,
    resource: ResourceType,
    overrides: &[PriceOverride],
) -> AppResult<Option<&PriceOverride>> {
    let found = overrides
        .iter()
        .find(|o| o.date == date && o.resource() == resource);

    if let Some(o) = found {
        if o.price <= 0 {
            return Err(AppError::MalformedOverride(format!(
                "{} override for {} has non-positive price {}",
                resource, o.date, o.price
            )));
        }
        if resource == ResourceType::Room {
            if let Some(mg) = o.max_guests {
                if mg <= 0 {
                    return Err(AppError::MalformedOverride(format!(
                        "room override for {} has non-positive capacity {}",
                        o.date, mg
                    )));
                }
            }
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn camping_override(d: u32, price: i64) -> PriceOverride {
        PriceOverride {
            id: 2,
            date: date(d),
            resource_type: ResourceType::Camping.into(),
            price,
            max_guests: None,
            crea_date: None,
            modif_date: None,
        }
    }

    #[test]
    fn test_base_constants_without_override() {
        let rate = night_rate(date(10), &[], &constants()).unwrap();
        assert_eq!(rate.room_price, 400_000);
        assert_eq!(rate.camping_price_per_person, 40_000);
        assert_eq!(rate.max_guests_per_room, 4);
    }

    #[test]
    fn test_room_override_supersedes_base() {
        let overrides = vec![room_override(10, 600_000, Some(2))];
        let rate = night_rate(date(10), &overrides, &constants()).unwrap();
        assert_eq!(rate.room_price, 600_000);
        assert_eq!(rate.max_guests_per_room, 2);
        // Camping untouched
        assert_eq!(rate.camping_price_per_person, 40_000);
    }

    #[test]
    fn test_override_is_scoped_to_its_date() {
        let overrides = vec![room_override(10, 600_000, Some(2))];
        let adjacent = night_rate(date(11), &overrides, &constants()).unwrap();
        assert_eq!(adjacent.room_price, 400_000);
        assert_eq!(adjacent.max_guests_per_room, 4);
    }

    #[test]
    fn test_room_override_without_capacity_keeps_base_capacity() {
        let overrides = vec![room_override(10, 600_000, None)];
        let rate = night_rate(date(10), &overrides, &constants()).unwrap();
        assert_eq!(rate.room_price, 600_000);
        assert_eq!(rate.max_guests_per_room, 4);
    }

    #[test]
    fn test_camping_override() {
        let overrides = vec![camping_override(10, 55_000)];
        let rate = night_rate(date(10), &overrides, &constants()).unwrap();
        assert_eq!(rate.camping_price_per_person, 55_000);
        assert_eq!(rate.room_price, 400_000);
    }

    #[test]
    fn test_room_and_camping_overrides_same_date() {
        let overrides = vec![room_override(10, 500_000, Some(3)), camping_override(10, 50_000)];
        let rate = night_rate(date(10), &overrides, &constants()).unwrap();
        assert_eq!(rate.room_price, 500_000);
        assert_eq!(rate.camping_price_per_person, 50_000);
        assert_eq!(rate.max_guests_per_room, 3);
    }

    #[test]
    fn test_malformed_price_fails() {
        let overrides = vec![room_override(10, 0, None)];
        let err = night_rate(date(10), &overrides, &constants()).unwrap_err();
        assert!(matches!(err, AppError::MalformedOverride(_)));

        let overrides = vec![camping_override(10, -5)];
        let err = night_rate(date(10), &overrides, &constants()).unwrap_err();
        assert!(matches!(err, AppError::MalformedOverride(_)));
    }

    #[test]
    fn test_malformed_capacity_fails() {
        let overrides = vec![room_override(10, 600_000, Some(0))];
        let err = night_rate(date(10), &overrides, &constants()).unwrap_err();
        assert!(matches!(err, AppError::MalformedOverride(_)));
    }
}
