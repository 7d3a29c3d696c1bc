// ============================================================================
// Promo Core - Company Service
// File: crates/promo-core/src/services/company_service.rs
// ============================================================================
//! Company lifecycle: creation, update, deactivation and key rotation

use std::sync::Arc;
use chrono::Utc;
use promo_shared::Pagination;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{Company, NewCompany};
use crate::error::DomainError;
use crate::repositories::CompanyRepository;

pub struct CompanyService<R: CompanyRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CompanyRepository + ?Sized> CompanyService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Key material for both creation and rotation comes from here.
    fn next_api_key() -> String {
        promo_security::generate_api_key()
    }

    /// Create an active company with a fresh API key
    pub async fn create(&self, input: NewCompany) -> Result<Company, DomainError> {
        input.validate()?;

        let company = Company::new(input, Self::next_api_key(), Utc::now())?;
        let created = self.repo.create(&company).await?;

        info!(company_id = %created.id, "Company created");
        Ok(created)
    }

    pub async fn get(&self, id: &Uuid) -> Result<Company, DomainError> {
        self.repo.find_by_id(id).await?.ok_or(DomainError::CompanyNotFound)
    }

    pub async fn get_by_api_key(&self, api_key: &str) -> Result<Company, DomainError> {
        self.repo
            .find_by_api_key(api_key)
            .await?
            .ok_or(DomainError::CompanyNotFound)
    }

    pub async fn get_by_cnpj(&self, cnpj: &str) -> Result<Company, DomainError> {
        self.repo.find_by_cnpj(cnpj).await?.ok_or(DomainError::CompanyNotFound)
    }

    pub async fn list(&self, pagination: Pagination) -> Result<Vec<Company>, DomainError> {
        self.repo.find_all(pagination.resolve()).await
    }

    /// Full replace of the mutable fields. Soft-deleted companies are not
    /// matched and come back as `CompanyNotFound`.
    pub async fn update(&self, mut company: Company) -> Result<Company, DomainError> {
        company.validate()?;
        company.updated_at = Utc::now();

        let updated = self
            .repo
            .update(&company)
            .await?
            .ok_or(DomainError::CompanyNotFound)?;

        info!(company_id = %updated.id, "Company updated");
        Ok(updated)
    }

    /// Soft-delete. Repeating it on an already deactivated company is a no-op.
    pub async fn deactivate(&self, id: &Uuid) -> Result<(), DomainError> {
        if self.repo.deactivate(id, Utc::now()).await? {
            info!(company_id = %id, "Company deactivated");
        } else {
            debug!(company_id = %id, "Deactivate matched no live company");
        }
        Ok(())
    }

    /// Replace the company's key and hand the new one back. The previous key
    /// stops resolving as soon as this returns. Concurrent rotations are not
    /// serialized: the last write wins.
    pub async fn rotate_api_key(&self, id: &Uuid) -> Result<String, DomainError> {
        let new_key = Self::next_api_key();

        if !self.repo.rotate_api_key(id, &new_key, Utc::now()).await? {
            warn!(company_id = %id, "Key rotation for unknown or deactivated company");
            return Err(DomainError::CompanyNotFound);
        }

        info!(company_id = %id, key = %promo_security::fingerprint(&new_key), "API key rotated");
        Ok(new_key)
    }
}
