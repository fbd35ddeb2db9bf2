//! Settings service (admin pricing configuration)

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        price_override::{PriceOverride, UpsertPriceOverride},
        settings::{keys, SettingsResponse, UpdatePricingRequest},
    },
    repository::Repository,
};

use super::pricing::PricingService;

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
    pricing: PricingService,
}

impl SettingsService {
    pub fn new(repository: Repository, pricing: PricingService) -> Self {
        Self { repository, pricing }
    }

    /// Current settings: base constants plus all exception days
    pub async fn settings(&self) -> AppResult<SettingsResponse> {
        Ok(SettingsResponse {
            pricing: self.pricing.constants().await?,
            overrides: self.repository.overrides.list().await?,
        })
    }

    /// Update base pricing values; only the provided fields are written
    pub async fn update_pricing(
        &self,
        request: UpdatePricingRequest,
    ) -> AppResult<SettingsResponse> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(v) = request.room_price {
            self.repository.settings.set(keys::ROOM_PRICE, v).await?;
        }
        if let Some(v) = request.camping_price_per_person {
            self.repository
                .settings
                .set(keys::CAMPING_PRICE_PER_PERSON, v)
                .await?;
        }
        if let Some(v) = request.max_guests_per_room {
            self.repository
                .settings
                .set(keys::MAX_GUESTS_PER_ROOM, i64::from(v))
                .await?;
        }
        if let Some(v) = request.total_rooms {
            self.repository
                .settings
                .set(keys::TOTAL_ROOMS, i64::from(v))
                .await?;
        }

        tracing::info!("Pricing settings updated");
        self.settings().await
    }

    /// Create or replace the override for one date and resource
    pub async fn upsert_override(&self, data: UpsertPriceOverride) -> AppResult<PriceOverride> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let row = self.repository.overrides.upsert(&data).await?;
        self.pricing.invalidate_overrides().await;
        tracing::info!(
            "Override saved: {} {} price {}",
            row.date,
            row.resource(),
            row.price
        );
        Ok(row)
    }

    /// Delete an exception day
    pub async fn delete_override(&self, id: i32) -> AppResult<()> {
        self.repository.overrides.delete(id).await?;
        self.pricing.invalidate_overrides().await;
        tracing::info!("Override {} deleted", id);
        Ok(())
    }
}
