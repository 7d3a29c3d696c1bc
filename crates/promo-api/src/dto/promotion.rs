//! Promotion payloads

use chrono::{DateTime, Utc};
use promo_core::domain::{DiscountType, Promotion, PromotionDraft};
use promo_shared::constants::{MAX_COUPON_LENGTH, MAX_TITLE_LENGTH};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

fn default_active() -> bool {
    true
}

/// Body of both `POST /promotions` and `PUT /promotions/{id}`
#[derive(Debug, Deserialize, Validate)]
pub struct PromotionRequest {
    #[validate(length(max = MAX_TITLE_LENGTH, message = "Title too long"))]
    pub title: String,
    #[validate(length(max = 1000, message = "Description too long"))]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(range(exclusive_min = 0.0, message = "minimum_purchase_amount must be positive"))]
    pub minimum_purchase_amount: Option<f64>,
    #[validate(range(min = 1, message = "max_usage must be at least 1"))]
    pub max_usage: Option<i32>,
    #[validate(range(min = 0, message = "current_usage cannot be negative"))]
    pub current_usage: Option<i32>,
    #[validate(length(min = 1, max = MAX_COUPON_LENGTH, message = "Coupon code must be 1-64 characters"))]
    pub coupon_code: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl From<PromotionRequest> for PromotionDraft {
    fn from(req: PromotionRequest) -> Self {
        PromotionDraft {
            title: req.title,
            description: req.description,
            discount_type: req.discount_type,
            discount_value: req.discount_value,
            start_date: req.start_date,
            end_date: req.end_date,
            minimum_purchase_amount: req.minimum_purchase_amount,
            max_usage: req.max_usage,
            current_usage: req.current_usage,
            coupon_code: req.coupon_code,
            is_active: req.is_active,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PromotionDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_purchase_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_usage: Option<i32>,
    pub current_usage: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Promotion> for PromotionDto {
    fn from(p: Promotion) -> Self {
        Self {
            id: p.id,
            company_id: p.company_id,
            title: p.title,
            description: p.description,
            discount_type: p.discount_type,
            discount_value: p.discount_value,
            start_date: p.start_date,
            end_date: p.end_date,
            minimum_purchase_amount: p.minimum_purchase_amount,
            max_usage: p.max_usage,
            current_usage: p.current_usage,
            coupon_code: p.coupon_code,
            is_active: p.is_active,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}
