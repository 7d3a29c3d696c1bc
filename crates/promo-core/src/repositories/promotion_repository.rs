//! Promotion repository trait (port)
//!
//! All lookups are scoped to the owning company.

use async_trait::async_trait;
use promo_shared::Page;
use uuid::Uuid;

use crate::domain::Promotion;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromotionRepository: Send + Sync {
    async fn create(&self, promotion: &Promotion) -> Result<Promotion, DomainError>;
    async fn find_by_id(&self, company_id: &Uuid, id: &Uuid) -> Result<Option<Promotion>, DomainError>;
    async fn find_all(&self, company_id: &Uuid, page: Page) -> Result<Vec<Promotion>, DomainError>;
    /// Case-insensitive substring match on `coupon_code`.
    async fn find_by_coupon(&self, company_id: &Uuid, coupon: &str) -> Result<Vec<Promotion>, DomainError>;
    /// `None` when no row matched.
    async fn update(&self, promotion: &Promotion) -> Result<Option<Promotion>, DomainError>;
    /// `false` when no row matched.
    async fn delete(&self, company_id: &Uuid, id: &Uuid) -> Result<bool, DomainError>;
}
