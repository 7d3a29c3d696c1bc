//! Company payloads
//!
//! The API key leaves the server only in `CreatedCompanyDto` and
//! `RotatedKeyDto`.

use chrono::{DateTime, Utc};
use promo_core::domain::{Company, NewCompany};
use promo_shared::constants::{MAX_CNPJ_LENGTH, MAX_NAME_LENGTH};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(max = MAX_NAME_LENGTH, message = "Name too long"))]
    pub name: String,
    #[validate(length(max = MAX_CNPJ_LENGTH, message = "CNPJ too long"))]
    pub cnpj: String,
}

impl From<CreateCompanyRequest> for NewCompany {
    fn from(req: CreateCompanyRequest) -> Self {
        NewCompany::new(req.name, req.cnpj)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(max = MAX_NAME_LENGTH, message = "Name too long"))]
    pub name: String,
    #[validate(length(max = MAX_CNPJ_LENGTH, message = "CNPJ too long"))]
    pub cnpj: String,
    pub is_active: Option<bool>,
}

impl UpdateCompanyRequest {
    /// Overlays the request on the stored company; the key is left untouched.
    pub fn apply_to(self, mut company: Company) -> Company {
        company.name = self.name;
        company.cnpj = self.cnpj;
        if let Some(active) = self.is_active {
            company.is_active = active;
        }
        company
    }
}

#[derive(Debug, Serialize)]
pub struct CompanyDto {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Company> for CompanyDto {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            cnpj: c.cnpj,
            is_active: c.is_active,
            created_at: c.created_at,
            updated_at: c.updated_at,
            deleted_at: c.deleted_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedCompanyDto {
    #[serde(flatten)]
    pub company: CompanyDto,
    pub api_key: String,
}

impl From<Company> for CreatedCompanyDto {
    fn from(mut c: Company) -> Self {
        let api_key = std::mem::take(&mut c.api_key);
        Self { company: c.into(), api_key }
    }
}

#[derive(Debug, Serialize)]
pub struct RotatedKeyDto {
    pub api_key: String,
}
