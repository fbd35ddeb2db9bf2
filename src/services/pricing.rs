//! Pricing service
//!
//! Loads the two engine inputs (pricing constants, override set) and
//! invokes the pure quote engine. The override set is cached in-process
//! and invalidated on every admin override write, so the admin settings
//! flow reads its own writes while public quoting tolerates the brief
//! staleness of an already-filled cache.

use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::{
    config::PricingDefaults,
    error::{AppError, AppResult},
    models::{price_override::PriceOverride, settings::PricingConstants, stay::StayRequest},
    pricing::{self, Quote},
    repository::Repository,
};

type OverrideCache = Arc<RwLock<Option<Arc<Vec<PriceOverride>>>>>;

#[derive(Clone)]
pub struct PricingService {
    repository: Repository,
    defaults: PricingDefaults,
    override_cache: OverrideCache,
}

impl PricingService {
    pub fn new(repository: Repository, defaults: PricingDefaults) -> Self {
        Self {
            repository,
            defaults,
            override_cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Compute a quote for a stay.
    ///
    /// This is the single allocation code path; the public booking form,
    /// the admin simulators and the settings preview all go through it.
    pub async fn quote(&self, stay: &StayRequest) -> AppResult<Quote> {
        stay.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let constants = self.constants().await?;
        let overrides = self.overrides().await?;

        let quote = pricing::compute_quote(stay, &overrides, &constants)?;
        tracing::debug!(
            "Quote: {} guests, {} nights, total {}",
            stay.guest_count,
            quote.nights,
            quote.total
        );
        Ok(quote)
    }

    /// Current pricing constants (settings store, config defaults for
    /// missing keys)
    pub async fn constants(&self) -> AppResult<PricingConstants> {
        self.repository.settings.constants(&self.defaults).await
    }

    /// The current override set, cached until the next admin write
    pub async fn overrides(&self) -> AppResult<Arc<Vec<PriceOverride>>> {
        if let Some(cached) = self.override_cache.read().await.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let mut slot = self.override_cache.write().await;
        // Another request may have filled the cache while we waited
        if let Some(cached) = slot.as_ref() {
            return Ok(Arc::clone(cached));
        }

        let loaded = Arc::new(self.repository.overrides.list().await?);
        tracing::debug!("Loaded {} price overrides", loaded.len());
        *slot = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Drop the cached override set; the next quote re-reads the store
    pub async fn invalidate_overrides(&self) {
        *self.override_cache.write().await = None;
        tracing::debug!("Override cache invalidated");
    }
}
