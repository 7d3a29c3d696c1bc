// ============================================================================
// Promo Core - Promotion Entity
// File: crates/promo-core/src/domain/promotion.rs
// Description: Discount promotion owned by a company
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Discount type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Percentage,
    FixedAmount,
}

impl DiscountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::FixedAmount => "fixed_amount",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "percentage" => Some(DiscountType::Percentage),
            "fixed_amount" => Some(DiscountType::FixedAmount),
            _ => None,
        }
    }
}

impl Default for DiscountType {
    fn default() -> Self {
        DiscountType::Percentage
    }
}

/// Promotion entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: Uuid,
    pub company_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub minimum_purchase_amount: Option<f64>,
    pub max_usage: Option<i32>,
    pub current_usage: i32,
    pub coupon_code: Option<String>,
    pub is_active: bool,

    // Audit fields
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Promotion {
    /// Builds a new promotion owned by `company_id`. Usage starts at zero
    /// unless the draft carries a count.
    pub fn new(company_id: Uuid, draft: PromotionDraft, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        draft.validate()?;

        Ok(Self {
            id: promo_shared::new_id(),
            company_id,
            title: draft.title,
            description: draft.description,
            discount_type: draft.discount_type,
            discount_value: draft.discount_value,
            start_date: draft.start_date,
            end_date: draft.end_date,
            minimum_purchase_amount: draft.minimum_purchase_amount,
            max_usage: draft.max_usage,
            current_usage: draft.current_usage.unwrap_or(0),
            coupon_code: draft.coupon_code,
            is_active: draft.is_active,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces every mutable field with the draft's. An absent usage count
    /// keeps the stored counter.
    pub fn apply(&mut self, draft: PromotionDraft, now: DateTime<Utc>) -> Result<(), ValidationError> {
        draft.validate()?;

        self.title = draft.title;
        self.description = draft.description;
        self.discount_type = draft.discount_type;
        self.discount_value = draft.discount_value;
        self.start_date = draft.start_date;
        self.end_date = draft.end_date;
        self.minimum_purchase_amount = draft.minimum_purchase_amount;
        self.max_usage = draft.max_usage;
        if let Some(usage) = draft.current_usage {
            self.current_usage = usage;
        }
        self.coupon_code = draft.coupon_code;
        self.is_active = draft.is_active;
        self.updated_at = now;
        Ok(())
    }
}

/// Mutable promotion fields, as supplied on create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionDraft {
    pub title: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: f64,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub minimum_purchase_amount: Option<f64>,
    pub max_usage: Option<i32>,
    pub current_usage: Option<i32>,
    pub coupon_code: Option<String>,
    pub is_active: bool,
}

impl PromotionDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.start_date > self.end_date {
            return Err(ValidationError::DateRange);
        }
        // NaN fails this comparison too
        if !(self.discount_value > 0.0) {
            return Err(ValidationError::DiscountValue);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn draft() -> PromotionDraft {
        PromotionDraft {
            title: "Summer sale".to_string(),
            description: None,
            discount_type: DiscountType::Percentage,
            discount_value: 20.0,
            start_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
            minimum_purchase_amount: None,
            max_usage: Some(100),
            current_usage: None,
            coupon_code: Some("SAVE20".to_string()),
            is_active: true,
        }
    }

    #[test]
    fn test_new_promotion_starts_unused() {
        let promo = Promotion::new(Uuid::new_v4(), draft(), Utc::now()).unwrap();
        assert_eq!(promo.current_usage, 0);
        assert_eq!(promo.created_at, promo.updated_at);
    }

    #[test]
    fn test_same_day_window_is_valid() {
        let mut d = draft();
        d.end_date = d.start_date;
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_inverted_window_rejected() {
        let mut d = draft();
        d.start_date = d.end_date + Duration::seconds(1);
        assert_eq!(d.validate(), Err(ValidationError::DateRange));
    }

    #[test]
    fn test_non_positive_discount_rejected() {
        for value in [0.0, -1.5, f64::NAN] {
            let mut d = draft();
            d.discount_value = value;
            assert_eq!(d.validate(), Err(ValidationError::DiscountValue));
        }
    }

    #[test]
    fn test_apply_keeps_usage_when_absent() {
        let mut promo = Promotion::new(Uuid::new_v4(), draft(), Utc::now()).unwrap();
        promo.current_usage = 7;

        let mut d = draft();
        d.title = "Winter sale".to_string();
        promo.apply(d, Utc::now()).unwrap();

        assert_eq!(promo.title, "Winter sale");
        assert_eq!(promo.current_usage, 7);
    }

    #[test]
    fn test_discount_type_round_trip() {
        assert_eq!(DiscountType::from_str("FIXED_AMOUNT"), Some(DiscountType::FixedAmount));
        assert_eq!(DiscountType::from_str(DiscountType::Percentage.as_str()), Some(DiscountType::Percentage));
        assert_eq!(DiscountType::from_str("bogus"), None);
    }
}
