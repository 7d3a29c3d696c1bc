//! Application-wide constants

pub const DEFAULT_PAGE_LIMIT: i64 = 10;
pub const DEFAULT_PAGE_OFFSET: i64 = 0;
pub const API_KEY_HEADER: &str = "X-API-Key";
pub const API_KEY_BYTES: usize = 32;
pub const API_KEY_PREFIX: &str = "pk_";
pub const KEY_FINGERPRINT_LEN: usize = 12;
pub const MAX_NAME_LENGTH: u64 = 255;
pub const MAX_CNPJ_LENGTH: u64 = 32;
pub const MAX_TITLE_LENGTH: u64 = 255;
pub const MAX_COUPON_LENGTH: u64 = 64;
