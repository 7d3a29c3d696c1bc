//! # Promo Core - Domain Module
//!
//! Tenant companies and the promotions they publish.

pub mod company;
pub mod promotion;

pub use company::{Company, NewCompany};
pub use promotion::{DiscountType, Promotion, PromotionDraft};
