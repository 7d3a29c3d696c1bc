//! Request/response payloads

pub mod company;
pub mod promotion;
pub mod query;

pub use company::{CompanyDto, CreateCompanyRequest, CreatedCompanyDto, RotatedKeyDto, UpdateCompanyRequest};
pub use promotion::{PromotionDto, PromotionRequest};
pub use query::{CouponQuery, PageQuery, ValidatedJson};
