// ============================================================================
// Promo Infrastructure - PostgreSQL Company Repository
// File: crates/promo-infrastructure/src/database/postgres/company_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use promo_core::domain::Company;
use promo_core::error::DomainError;
use promo_core::repositories::CompanyRepository;
use promo_shared::Page;

use super::map_db_error;

pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct CompanyRow {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub api_key: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            cnpj: row.cnpj,
            api_key: row.api_key,
            is_active: row.is_active && row.deleted_at.is_none(),
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, company: &Company) -> Result<Company, DomainError> {
        let row: CompanyRow = sqlx::query_as(
            r#"
            INSERT INTO companies (
                id, name, cnpj, api_key, is_active, created_at, updated_at, deleted_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, NULL)
            RETURNING id, name, cnpj, api_key, is_active, created_at, updated_at, deleted_at
            "#
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.cnpj)
        .bind(&company.api_key)
        .bind(company.is_active)
        .bind(company.created_at)
        .bind(company.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("creating company", e))?;

        info!("Company row inserted: {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, name, cnpj, api_key, is_active, created_at, updated_at, deleted_at
            FROM companies
            WHERE id = $1 AND deleted_at IS NULL
            "#
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding company by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_api_key(&self, api_key: &str) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, name, cnpj, api_key, is_active, created_at, updated_at, deleted_at
            FROM companies
            WHERE api_key = $1 AND deleted_at IS NULL
            "#
        )
        .bind(api_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding company by api key", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_by_cnpj(&self, cnpj: &str) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, name, cnpj, api_key, is_active, created_at, updated_at, deleted_at
            FROM companies
            WHERE cnpj = $1 AND deleted_at IS NULL
            ORDER BY created_at
            LIMIT 1
            "#
        )
        .bind(cnpj)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding company by cnpj", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self, page: Page) -> Result<Vec<Company>, DomainError> {
        let rows: Vec<CompanyRow> = sqlx::query_as(
            r#"
            SELECT id, name, cnpj, api_key, is_active, created_at, updated_at, deleted_at
            FROM companies
            WHERE deleted_at IS NULL
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing companies", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, company: &Company) -> Result<Option<Company>, DomainError> {
        let row: Option<CompanyRow> = sqlx::query_as(
            r#"
            UPDATE companies
            SET
                name = $2,
                cnpj = $3,
                api_key = $4,
                is_active = $5,
                updated_at = $6
            WHERE id = $1 AND deleted_at IS NULL
            RETURNING id, name, cnpj, api_key, is_active, created_at, updated_at, deleted_at
            "#
        )
        .bind(company.id)
        .bind(&company.name)
        .bind(&company.cnpj)
        .bind(&company.api_key)
        .bind(company.is_active)
        .bind(company.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating company", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn deactivate(&self, id: &Uuid, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE companies
            SET is_active = FALSE, deleted_at = $2, updated_at = $2
            WHERE id = $1 AND deleted_at IS NULL
            "#
        )
        .bind(id)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("deactivating company", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn rotate_api_key(&self, id: &Uuid, api_key: &str, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE companies
            SET api_key = $2, updated_at = $3
            WHERE id = $1 AND deleted_at IS NULL
            "#
        )
        .bind(id)
        .bind(api_key)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("rotating api key", e))?;

        Ok(result.rows_affected() > 0)
    }
}
