//! Farmstay Booking Services
//!
//! Pricing and capacity allocation services for a small rural lodging
//! property: a pure per-night quote engine (rooms plus camping spillover,
//! with date-scoped price exceptions) and the Postgres-backed stores it
//! reads from and writes to. The web presentation layer lives elsewhere
//! and consumes this crate through [`services::Services`].

pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use pricing::{compute_quote, Quote};
