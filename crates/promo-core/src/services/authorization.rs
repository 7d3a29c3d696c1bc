// ============================================================================
// Promo Core - API Key Resolver
// File: crates/promo-core/src/services/authorization.rs
// ============================================================================
//! Resolves a presented API key to the active company it belongs to.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::Company;
use crate::error::{AuthError, DomainError};
use crate::repositories::CompanyRepository;

/// Read-only tenant resolution for protected requests
pub struct ApiKeyResolver<R: CompanyRepository + ?Sized> {
    company_repo: Arc<R>,
}

impl<R: CompanyRepository + ?Sized> ApiKeyResolver<R> {
    pub fn new(company_repo: Arc<R>) -> Self {
        Self { company_repo }
    }

    /// Unknown, inactive and soft-deleted keys all fail with the same
    /// `InvalidOrInactive` error.
    pub async fn resolve(&self, api_key: &str) -> Result<Company, DomainError> {
        if api_key.trim().is_empty() {
            debug!("Rejected request without API key");
            return Err(AuthError::Missing.into());
        }

        let fingerprint = promo_security::fingerprint(api_key);

        match self.company_repo.find_by_api_key(api_key).await? {
            Some(company) if company.can_authenticate() => {
                debug!(company_id = %company.id, key = %fingerprint, "API key resolved");
                Ok(company)
            }
            _ => {
                warn!(key = %fingerprint, "Rejected invalid or inactive API key");
                Err(AuthError::InvalidOrInactive.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewCompany;
    use crate::repositories::company_repository::MockCompanyRepository;
    use chrono::Utc;

    fn company(active: bool) -> Company {
        let mut company = Company::new(NewCompany::new("Acme", "123"), "pk_live".to_string(), Utc::now()).unwrap();
        company.is_active = active;
        company
    }

    #[tokio::test]
    async fn test_blank_key_never_hits_repository() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_find_by_api_key().never();
        let resolver = ApiKeyResolver::new(Arc::new(repo));

        for key in ["", "   ", "\t"] {
            let err = resolver.resolve(key).await.unwrap_err();
            assert_eq!(err, DomainError::Unauthorized(AuthError::Missing));
        }
    }

    #[tokio::test]
    async fn test_active_company_resolves() {
        let expected = company(true);
        let returned = expected.clone();
        let mut repo = MockCompanyRepository::new();
        repo.expect_find_by_api_key()
            .withf(|key| key == "pk_live")
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        let resolver = ApiKeyResolver::new(Arc::new(repo));

        assert_eq!(resolver.resolve("pk_live").await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_unknown_and_inactive_fail_identically() {
        let mut unknown = MockCompanyRepository::new();
        unknown.expect_find_by_api_key().returning(|_| Ok(None));

        let inactive_company = company(false);
        let mut inactive = MockCompanyRepository::new();
        inactive
            .expect_find_by_api_key()
            .returning(move |_| Ok(Some(inactive_company.clone())));

        let unknown_err = ApiKeyResolver::new(Arc::new(unknown)).resolve("pk_nope").await.unwrap_err();
        let inactive_err = ApiKeyResolver::new(Arc::new(inactive)).resolve("pk_live").await.unwrap_err();

        assert_eq!(unknown_err, DomainError::Unauthorized(AuthError::InvalidOrInactive));
        assert_eq!(unknown_err, inactive_err);
        assert_eq!(unknown_err.to_string(), inactive_err.to_string());
    }

    #[tokio::test]
    async fn test_persistence_failure_propagates() {
        let mut repo = MockCompanyRepository::new();
        repo.expect_find_by_api_key()
            .returning(|_| Err(DomainError::DatabaseError("connection reset".to_string())));
        let resolver = ApiKeyResolver::new(Arc::new(repo));

        assert!(matches!(
            resolver.resolve("pk_live").await,
            Err(DomainError::DatabaseError(_))
        ));
    }
}
