// ============================================================================
// Promo Infrastructure - PostgreSQL Promotion Repository
// File: crates/promo-infrastructure/src/database/postgres/promotion_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{info, warn};
use uuid::Uuid;

use promo_core::domain::{DiscountType, Promotion};
use promo_core::error::DomainError;
use promo_core::repositories::PromotionRepository;
use promo_shared::Page;

use super::map_db_error;

pub struct PgPromotionRepository {
    pool: PgPool,
}

impl PgPromotionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE metacharacters so the coupon is matched literally.
fn like_pattern(coupon: &str) -> String {
    let mut escaped = String::with_capacity(coupon.len() + 2);
    escaped.push('%');
    for c in coupon.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct PromotionRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub discount_type: String,
    pub discount_value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub minimum_purchase_amount: Option<f64>,
    pub max_usage: Option<i32>,
    pub current_usage: i32,
    pub coupon_code: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PromotionRow> for Promotion {
    fn from(row: PromotionRow) -> Self {
        let discount_type = DiscountType::from_str(&row.discount_type).unwrap_or_else(|| {
            warn!("Unknown discount_type '{}' on promotion {}", row.discount_type, row.id);
            DiscountType::default()
        });

        Promotion {
            id: row.id,
            company_id: row.company_id,
            title: row.title,
            description: row.description,
            discount_type,
            discount_value: row.discount_value,
            start_date: row.start_date,
            end_date: row.end_date,
            minimum_purchase_amount: row.minimum_purchase_amount,
            max_usage: row.max_usage,
            current_usage: row.current_usage,
            coupon_code: row.coupon_code,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl PromotionRepository for PgPromotionRepository {
    async fn create(&self, promotion: &Promotion) -> Result<Promotion, DomainError> {
        let row: PromotionRow = sqlx::query_as(
            r#"
            INSERT INTO promotions (
                id, company_id, title, description, discount_type, discount_value,
                start_date, end_date, minimum_purchase_amount, max_usage, current_usage,
                coupon_code, is_active, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING
                id, company_id, title, description, discount_type, discount_value,
                start_date, end_date, minimum_purchase_amount, max_usage, current_usage,
                coupon_code, is_active, created_at, updated_at
            "#
        )
        .bind(promotion.id)
        .bind(promotion.company_id)
        .bind(&promotion.title)
        .bind(&promotion.description)
        .bind(promotion.discount_type.as_str())
        .bind(promotion.discount_value)
        .bind(promotion.start_date)
        .bind(promotion.end_date)
        .bind(promotion.minimum_purchase_amount)
        .bind(promotion.max_usage)
        .bind(promotion.current_usage)
        .bind(&promotion.coupon_code)
        .bind(promotion.is_active)
        .bind(promotion.created_at)
        .bind(promotion.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("creating promotion", e))?;

        info!("Promotion row inserted: {}", row.id);
        Ok(row.into())
    }

    async fn find_by_id(&self, company_id: &Uuid, id: &Uuid) -> Result<Option<Promotion>, DomainError> {
        let row: Option<PromotionRow> = sqlx::query_as(
            r#"
            SELECT
                id, company_id, title, description, discount_type, discount_value,
                start_date, end_date, minimum_purchase_amount, max_usage, current_usage,
                coupon_code, is_active, created_at, updated_at
            FROM promotions
            WHERE id = $1 AND company_id = $2
            "#
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("finding promotion by id", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn find_all(&self, company_id: &Uuid, page: Page) -> Result<Vec<Promotion>, DomainError> {
        let rows: Vec<PromotionRow> = sqlx::query_as(
            r#"
            SELECT
                id, company_id, title, description, discount_type, discount_value,
                start_date, end_date, minimum_purchase_amount, max_usage, current_usage,
                coupon_code, is_active, created_at, updated_at
            FROM promotions
            WHERE company_id = $1
            ORDER BY created_at, id
            LIMIT $2 OFFSET $3
            "#
        )
        .bind(company_id)
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("listing promotions", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_coupon(&self, company_id: &Uuid, coupon: &str) -> Result<Vec<Promotion>, DomainError> {
        let rows: Vec<PromotionRow> = sqlx::query_as(
            r#"
            SELECT
                id, company_id, title, description, discount_type, discount_value,
                start_date, end_date, minimum_purchase_amount, max_usage, current_usage,
                coupon_code, is_active, created_at, updated_at
            FROM promotions
            WHERE company_id = $1 AND coupon_code ILIKE $2
            ORDER BY created_at, id
            "#
        )
        .bind(company_id)
        .bind(like_pattern(coupon))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("finding promotions by coupon", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, promotion: &Promotion) -> Result<Option<Promotion>, DomainError> {
        let row: Option<PromotionRow> = sqlx::query_as(
            r#"
            UPDATE promotions
            SET
                title = $3,
                description = $4,
                discount_type = $5,
                discount_value = $6,
                start_date = $7,
                end_date = $8,
                minimum_purchase_amount = $9,
                max_usage = $10,
                current_usage = $11,
                coupon_code = $12,
                is_active = $13,
                updated_at = $14
            WHERE id = $1 AND company_id = $2
            RETURNING
                id, company_id, title, description, discount_type, discount_value,
                start_date, end_date, minimum_purchase_amount, max_usage, current_usage,
                coupon_code, is_active, created_at, updated_at
            "#
        )
        .bind(promotion.id)
        .bind(promotion.company_id)
        .bind(&promotion.title)
        .bind(&promotion.description)
        .bind(promotion.discount_type.as_str())
        .bind(promotion.discount_value)
        .bind(promotion.start_date)
        .bind(promotion.end_date)
        .bind(promotion.minimum_purchase_amount)
        .bind(promotion.max_usage)
        .bind(promotion.current_usage)
        .bind(&promotion.coupon_code)
        .bind(promotion.is_active)
        .bind(promotion.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error("updating promotion", e))?;

        Ok(row.map(|r| r.into()))
    }

    async fn delete(&self, company_id: &Uuid, id: &Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM promotions WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error("deleting promotion", e))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_and_escapes() {
        assert_eq!(like_pattern("SAVE"), "%SAVE%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_unknown_discount_type_falls_back() {
        let now = Utc::now();
        let row = PromotionRow {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            title: "Legacy".to_string(),
            description: None,
            discount_type: "bogo".to_string(),
            discount_value: 1.0,
            start_date: now,
            end_date: now,
            minimum_purchase_amount: None,
            max_usage: None,
            current_usage: 0,
            coupon_code: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let promotion: Promotion = row.into();
        assert_eq!(promotion.discount_type, DiscountType::Percentage);
    }
}
