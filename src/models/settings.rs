//! Pricing settings models

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::price_override::PriceOverride;

/// Base pricing values in effect for nights without an override.
///
/// Loaded from the settings store on each quote; admin edits take effect
/// on the next read, they are never mutated in place.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingConstants {
    /// Price of one room for one night, in whole currency units
    pub room_price: i64,
    /// Price per camping guest for one night, in whole currency units
    pub camping_price_per_person: i64,
    /// How many guests fit in one room
    pub max_guests_per_room: i16,
    /// Total rooms the property physically has (the room ceiling)
    pub total_rooms: i16,
}

/// Settings keys in the key-value store
pub mod keys {
    pub const ROOM_PRICE: &str = "room_price";
    pub const CAMPING_PRICE_PER_PERSON: &str = "camping_price_per_person";
    pub const MAX_GUESTS_PER_ROOM: &str = "max_guests_per_room";
    pub const TOTAL_ROOMS: &str = "total_rooms";
}

/// Update pricing request; only the provided fields are written
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePricingRequest {
    #[validate(range(min = 1))]
    pub room_price: Option<i64>,
    #[validate(range(min = 1))]
    pub camping_price_per_person: Option<i64>,
    #[validate(range(min = 1))]
    pub max_guests_per_room: Option<i16>,
    #[validate(range(min = 1))]
    pub total_rooms: Option<i16>,
}

/// Settings response for the admin settings page
#[derive(Debug, Clone, Serialize)]
pub struct SettingsResponse {
    /// Base pricing constants
    pub pricing: PricingConstants,
    /// All exception days, date-ordered
    pub overrides: Vec<PriceOverride>,
}
