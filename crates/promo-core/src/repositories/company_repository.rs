//! Company repository trait (port)
//!
//! Every read and every write excludes soft-deleted rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use promo_shared::Page;
use uuid::Uuid;

use crate::domain::Company;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, company: &Company) -> Result<Company, DomainError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Company>, DomainError>;
    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Company>, DomainError>;
    async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<Company>, DomainError>;
    async fn find_all(&self, page: Page) -> Result<Vec<Company>, DomainError>;
    /// Full replace of name, cnpj, api_key, is_active and updated_at.
    /// `None` when no live row matched.
    async fn update(&self, company: &Company) -> Result<Option<Company>, DomainError>;
    /// Clears `is_active` and stamps `deleted_at` in one statement.
    /// `false` when no live row matched.
    async fn deactivate(&self, id: &Uuid, at: DateTime<Utc>) -> Result<bool, DomainError>;
    /// Replaces the key unconditionally (last writer wins).
    /// `false` when no live row matched.
    async fn rotate_api_key(&self, id: &Uuid, api_key: &str, at: DateTime<Utc>) -> Result<bool, DomainError>;
}
