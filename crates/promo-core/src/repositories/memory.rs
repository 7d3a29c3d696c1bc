//! In-memory repository adapters for tests

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use promo_shared::Page;
use uuid::Uuid;

use crate::domain::{Company, Promotion};
use crate::error::DomainError;
use crate::repositories::{CompanyRepository, PromotionRepository};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, DomainError> {
    mutex
        .lock()
        .map_err(|_| DomainError::DatabaseError("store lock poisoned".to_string()))
}

fn window<T: Clone>(rows: Vec<T>, page: Page) -> Vec<T> {
    rows.into_iter()
        .skip(page.offset as usize)
        .take(page.limit as usize)
        .collect()
}

#[derive(Default)]
pub struct InMemoryCompanyRepository {
    rows: Mutex<HashMap<Uuid, Company>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw row access, including soft-deleted rows.
    pub fn raw(&self, id: &Uuid) -> Option<Company> {
        self.rows.lock().ok().and_then(|rows| rows.get(id).cloned())
    }

    fn key_taken(rows: &HashMap<Uuid, Company>, api_key: &str, except: &Uuid) -> bool {
        rows.values().any(|c| c.api_key == api_key && c.id != *except)
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: &Company) -> Result<Company, DomainError> {
        let mut rows = lock(&self.rows)?;
        if rows.contains_key(&company.id) {
            return Err(DomainError::AlreadyExists("id".to_string()));
        }
        if Self::key_taken(&rows, &company.api_key, &company.id) {
            return Err(DomainError::AlreadyExists("api_key".to_string()));
        }
        rows.insert(company.id, company.clone());
        Ok(company.clone())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Company>, DomainError> {
        let rows = lock(&self.rows)?;
        Ok(rows.get(id).filter(|c| !c.is_deleted()).cloned())
    }

    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Company>, DomainError> {
        let rows = lock(&self.rows)?;
        Ok(rows
            .values()
            .find(|c| c.api_key == api_key && !c.is_deleted())
            .cloned())
    }

    async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<Company>, DomainError> {
        let rows = lock(&self.rows)?;
        Ok(rows
            .values()
            .find(|c| c.cnpj == cnpj && !c.is_deleted())
            .cloned())
    }

    async fn find_all(&self, page: Page) -> Result<Vec<Company>, DomainError> {
        let rows = lock(&self.rows)?;
        let mut live: Vec<Company> = rows.values().filter(|c| !c.is_deleted()).cloned().collect();
        live.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(window(live, page))
    }

    async fn update(&self, company: &Company) -> Result<Option<Company>, DomainError> {
        let mut rows = lock(&self.rows)?;
        if Self::key_taken(&rows, &company.api_key, &company.id) {
            return Err(DomainError::AlreadyExists("api_key".to_string()));
        }
        match rows.get_mut(&company.id).filter(|c| !c.is_deleted()) {
            Some(row) => {
                row.name = company.name.clone();
                row.cnpj = company.cnpj.clone();
                row.api_key = company.api_key.clone();
                row.is_active = company.is_active;
                row.updated_at = company.updated_at;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn deactivate(&self, id: &Uuid, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let mut rows = lock(&self.rows)?;
        match rows.get_mut(id).filter(|c| !c.is_deleted()) {
            Some(row) => {
                row.is_active = false;
                row.deleted_at = Some(at);
                row.updated_at = at;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn rotate_api_key(&self, id: &Uuid, api_key: &str, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let mut rows = lock(&self.rows)?;
        if Self::key_taken(&rows, api_key, id) {
            return Err(DomainError::AlreadyExists("api_key".to_string()));
        }
        match rows.get_mut(id).filter(|c| !c.is_deleted()) {
            Some(row) => {
                row.api_key = api_key.to_string();
                row.updated_at = at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[derive(Default)]
pub struct InMemoryPromotionRepository {
    rows: Mutex<HashMap<Uuid, Promotion>>,
}

impl InMemoryPromotionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn owned(rows: &HashMap<Uuid, Promotion>, company_id: &Uuid) -> Vec<Promotion> {
        let mut owned: Vec<Promotion> = rows
            .values()
            .filter(|p| p.company_id == *company_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        owned
    }
}

#[async_trait]
impl PromotionRepository for InMemoryPromotionRepository {
    async fn create(&self, promotion: &Promotion) -> Result<Promotion, DomainError> {
        let mut rows = lock(&self.rows)?;
        if rows.contains_key(&promotion.id) {
            return Err(DomainError::AlreadyExists("id".to_string()));
        }
        rows.insert(promotion.id, promotion.clone());
        Ok(promotion.clone())
    }

    async fn find_by_id(&self, company_id: &Uuid, id: &Uuid) -> Result<Option<Promotion>, DomainError> {
        let rows = lock(&self.rows)?;
        Ok(rows.get(id).filter(|p| p.company_id == *company_id).cloned())
    }

    async fn find_all(&self, company_id: &Uuid, page: Page) -> Result<Vec<Promotion>, DomainError> {
        let rows = lock(&self.rows)?;
        Ok(window(Self::owned(&rows, company_id), page))
    }

    async fn find_by_coupon(&self, company_id: &Uuid, coupon: &str) -> Result<Vec<Promotion>, DomainError> {
        let rows = lock(&self.rows)?;
        let needle = coupon.to_lowercase();
        Ok(Self::owned(&rows, company_id)
            .into_iter()
            .filter(|p| {
                p.coupon_code
                    .as_deref()
                    .is_some_and(|code| code.to_lowercase().contains(&needle))
            })
            .collect())
    }

    async fn update(&self, promotion: &Promotion) -> Result<Option<Promotion>, DomainError> {
        let mut rows = lock(&self.rows)?;
        match rows.get_mut(&promotion.id).filter(|p| p.company_id == promotion.company_id) {
            Some(row) => {
                let created_at = row.created_at;
                *row = promotion.clone();
                row.created_at = created_at;
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, company_id: &Uuid, id: &Uuid) -> Result<bool, DomainError> {
        let mut rows = lock(&self.rows)?;
        if rows.get(id).is_some_and(|p| p.company_id == *company_id) {
            rows.remove(id);
            return Ok(true);
        }
        Ok(false)
    }
}
