//! Business logic services

pub mod bookings;
pub mod pricing;
pub mod settings;

use crate::{config::PricingDefaults, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub pricing: pricing::PricingService,
    pub settings: settings::SettingsService,
    pub bookings: bookings::BookingsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, pricing_defaults: PricingDefaults) -> Self {
        let pricing = pricing::PricingService::new(repository.clone(), pricing_defaults);
        Self {
            settings: settings::SettingsService::new(repository.clone(), pricing.clone()),
            bookings: bookings::BookingsService::new(repository, pricing.clone()),
            pricing,
        }
    }
}
