//! Dynamic pricing and capacity allocation engine
//!
//! This module computes stay quotes: for each night of a date range it
//! resolves the effective prices and room capacity (base constants,
//! superseded by admin overrides for single dates), decides how many
//! rooms the party needs and how many guests spill over into camping,
//! and sums the per-night costs into a total.
//!
//! Everything here is pure and synchronous. Callers fetch the override
//! set and the pricing constants first, then invoke [`compute_quote`];
//! the engine never touches storage and never mutates its inputs, so it
//! is safe to call from any number of concurrent quote requests.

pub mod allocator;
pub mod quote;
pub mod resolver;

pub use allocator::allocate;
pub use quote::compute_quote;
pub use resolver::night_rate;

use chrono::NaiveDate;
use serde::Serialize;

/// Effective prices and room capacity for one night, after override
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightRate {
    /// Price of one room for this night, in whole currency units
    pub room_price: i64,
    /// Price per camping guest for this night, in whole currency units
    pub camping_price_per_person: i64,
    /// How many guests fit in one room this night
    pub max_guests_per_room: i16,
}

/// How one night of a stay is priced and allocated.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct NightlyAllocation {
    pub date: NaiveDate,
    /// Rooms allocated, never above the property's room ceiling
    pub rooms_used: i16,
    /// Guests that did not fit in the allocated rooms
    pub camping_guests: i32,
    /// Effective room price used for this night
    pub room_price: i64,
    /// Effective camping price used for this night
    pub camping_price_per_person: i64,
    /// `rooms_used * room_price + camping_guests * camping_price_per_person`
    pub night_cost: i64,
}

/// A full stay quote.
///
/// `rooms` is the first night's room count, kept for display; the
/// per-night `breakdown` is the authoritative result and is what callers
/// should derive any summary figures from (prices and capacities may
/// differ night to night within one stay).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Quote {
    /// Whole nights in `[check_in, check_out)`; 0 when no valid range is
    /// selected
    pub nights: i64,
    /// Total cost of the stay, in whole currency units
    pub total: i64,
    /// Rooms used on the first night (0 for a zero-night quote)
    pub rooms: i16,
    pub breakdown: Vec<NightlyAllocation>,
}

impl Quote {
    /// Quote for an empty or inverted date range. Not an error: it
    /// signals "no valid stay selected yet" to the caller.
    pub fn empty() -> Self {
        Self {
            nights: 0,
            total: 0,
            rooms: 0,
            breakdown: Vec::new(),
        }
    }

    /// Whether any night of the stay puts guests in camping.
    pub fn has_camping(&self) -> bool {
        self.breakdown.iter().any(|n| n.camping_guests > 0)
    }
}
