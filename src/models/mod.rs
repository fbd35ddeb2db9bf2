//! Data models for the Farmstay booking services

pub mod booking;
pub mod enums;
pub mod price_override;
pub mod settings;
pub mod stay;

// Re-export commonly used types
pub use booking::{AvailabilityDay, Booking, BookingDetails, CreateBooking};
pub use enums::ResourceType;
pub use price_override::{PriceOverride, UpsertPriceOverride};
pub use settings::{PricingConstants, SettingsResponse, UpdatePricingRequest};
pub use stay::StayRequest;
