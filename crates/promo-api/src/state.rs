use std::sync::Arc;

use async_trait::async_trait;
use promo_core::repositories::{CompanyRepository, PromotionRepository};
use promo_core::services::{ApiKeyResolver, CompanyService, PromotionService};
use sqlx::PgPool;

/// Backing-store probe used by the readiness endpoint
#[async_trait]
pub trait ReadinessCheck: Send + Sync {
    async fn is_ready(&self) -> bool;
}

#[async_trait]
impl ReadinessCheck for PgPool {
    async fn is_ready(&self) -> bool {
        sqlx::query("SELECT 1").execute(self).await.is_ok()
    }
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ApiKeyResolver<dyn CompanyRepository>>,
    pub companies: Arc<CompanyService<dyn CompanyRepository>>,
    pub promotions: Arc<PromotionService<dyn PromotionRepository>>,
    pub readiness: Arc<dyn ReadinessCheck>,
}

impl AppState {
    pub fn new(
        company_repo: Arc<dyn CompanyRepository>,
        promotion_repo: Arc<dyn PromotionRepository>,
        readiness: Arc<dyn ReadinessCheck>,
    ) -> Self {
        Self {
            resolver: Arc::new(ApiKeyResolver::new(company_repo.clone())),
            companies: Arc::new(CompanyService::new(company_repo)),
            promotions: Arc::new(PromotionService::new(promotion_repo)),
            readiness,
        }
    }
}
