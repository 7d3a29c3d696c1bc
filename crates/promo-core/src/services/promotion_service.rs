// ============================================================================
// Promo Core - Promotion Service
// File: crates/promo-core/src/services/promotion_service.rs
// ============================================================================
//! Promotion lifecycle, scoped to the authenticated company

use std::sync::Arc;
use chrono::Utc;
use promo_shared::Pagination;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{Company, Promotion, PromotionDraft};
use crate::error::{DomainError, ValidationError};
use crate::repositories::PromotionRepository;

pub struct PromotionService<R: PromotionRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: PromotionRepository + ?Sized> PromotionService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, tenant: &Company, draft: PromotionDraft) -> Result<Promotion, DomainError> {
        let promotion = Promotion::new(tenant.id, draft, Utc::now())?;
        let created = self.repo.create(&promotion).await?;

        info!(company_id = %tenant.id, promotion_id = %created.id, "Promotion created");
        Ok(created)
    }

    pub async fn get(&self, tenant: &Company, id: &Uuid) -> Result<Promotion, DomainError> {
        self.repo
            .find_by_id(&tenant.id, id)
            .await?
            .ok_or(DomainError::PromotionNotFound)
    }

    pub async fn list(&self, tenant: &Company, pagination: Pagination) -> Result<Vec<Promotion>, DomainError> {
        self.repo.find_all(&tenant.id, pagination.resolve()).await
    }

    /// Case-insensitive substring search. No match is an empty list, not an error.
    pub async fn find_by_coupon(&self, tenant: &Company, coupon: &str) -> Result<Vec<Promotion>, DomainError> {
        let coupon = coupon.trim();
        if coupon.is_empty() {
            return Err(ValidationError::Required("coupon").into());
        }

        let promotions = self.repo.find_by_coupon(&tenant.id, coupon).await?;
        debug!(company_id = %tenant.id, matches = promotions.len(), "Coupon lookup");
        Ok(promotions)
    }

    /// Full replace of the mutable fields after re-checking the date window
    /// and discount value.
    pub async fn update(&self, tenant: &Company, id: &Uuid, draft: PromotionDraft) -> Result<Promotion, DomainError> {
        draft.validate()?;

        let mut promotion = self.get(tenant, id).await?;
        promotion.apply(draft, Utc::now())?;

        let updated = self
            .repo
            .update(&promotion)
            .await?
            .ok_or(DomainError::PromotionNotFound)?;

        info!(company_id = %tenant.id, promotion_id = %id, "Promotion updated");
        Ok(updated)
    }

    /// Hard delete. A missing id is a successful no-op.
    pub async fn delete(&self, tenant: &Company, id: &Uuid) -> Result<(), DomainError> {
        if self.repo.delete(&tenant.id, id).await? {
            info!(company_id = %tenant.id, promotion_id = %id, "Promotion deleted");
        } else {
            debug!(company_id = %tenant.id, promotion_id = %id, "Delete matched no promotion");
        }
        Ok(())
    }
}
