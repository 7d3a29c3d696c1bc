// ============================================================================
// Promo Core - Company Entity
// File: crates/promo-core/src/domain/company.rs
// Description: Tenant company identified by its API key
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Company (tenant) entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub api_key: String,
    pub is_active: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Company {
    /// Builds an active company stamped at `now`. Callers supply the key.
    pub fn new(input: NewCompany, api_key: String, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        input.validate()?;

        Ok(Self {
            id: promo_shared::new_id(),
            name: input.name,
            cnpj: input.cnpj,
            api_key,
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Same non-empty rule as creation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_identity(&self.name, &self.cnpj)
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// A soft-deleted company is implicitly inactive.
    pub fn can_authenticate(&self) -> bool {
        self.is_active && !self.is_deleted()
    }
}

/// Input for company creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub name: String,
    pub cnpj: String,
}

impl NewCompany {
    pub fn new(name: impl Into<String>, cnpj: impl Into<String>) -> Self {
        Self { name: name.into(), cnpj: cnpj.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_identity(&self.name, &self.cnpj)
    }
}

fn validate_identity(name: &str, cnpj: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required("name"));
    }
    if cnpj.trim().is_empty() {
        return Err(ValidationError::Required("cnpj"));
    }
    Ok(())
}
