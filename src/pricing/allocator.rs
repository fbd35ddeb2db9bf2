//! Nightly room/camping allocation
//!
//! Decides, for one night, how many rooms a party occupies and how many
//! guests overflow into camping. Rooms are a finite pool; camping absorbs
//! any demand beyond the rooms actually allocated instead of rejecting
//! the stay.

use chrono::NaiveDate;

use crate::error::{AppError, AppResult};

use super::{NightRate, NightlyAllocation};

/// Allocate one night.
///
/// 1. rooms needed = ceil(guests / per-room capacity)
/// 2. rooms used = min(rooms needed, room ceiling)
/// 3. camping guests = guests minus the capacity actually allocated,
///    floored at zero
///
/// A non-positive `guest_count` yields the all-zero allocation. A
/// non-positive per-room capacity is a configuration error and fails the
/// quote; it is never clamped to a default.
pub fn allocate(
    date: NaiveDate,
    guest_count: i32,
    rate: &NightRate,
    total_rooms: i16,
) -> AppResult<NightlyAllocation> {
    if guest_count <= 0 {
        return Ok(NightlyAllocation {
            date,
            rooms_used: 0,
            camping_guests: 0,
            room_price: rate.room_price,
            camping_price_per_person: rate.camping_price_per_person,
            night_cost: 0,
        });
    }

    if rate.max_guests_per_room <= 0 {
        return Err(AppError::InvalidCapacityConfig(format!(
            "per-room capacity for {} resolves to {}",
            date, rate.max_guests_per_room
        )));
    }

    let per_room = i32::from(rate.max_guests_per_room);
    let ceiling = i32::from(total_rooms.max(0));

    let rooms_needed = (guest_count + per_room - 1) / per_room;
    let rooms_used = rooms_needed.min(ceiling);
    let room_capacity = rooms_used * per_room;
    let camping_guests = (guest_count - room_capacity).max(0);

    let night_cost = i64::from(rooms_used)
        .checked_mul(rate.room_price)
        .and_then(|rooms_cost| {
            i64::from(camping_guests)
                .checked_mul(rate.camping_price_per_person)
                .and_then(|camping_cost| rooms_cost.checked_add(camping_cost))
        })
        .ok_or_else(|| {
            AppError::Internal(format!("night cost overflow for {}", date))
        })?;

    Ok(NightlyAllocation {
        date,
        rooms_used: rooms_used as i16,
        camping_guests,
        room_price: rate.room_price,
        camping_price_per_person: rate.camping_price_per_person,
        night_cost,
    })
}
