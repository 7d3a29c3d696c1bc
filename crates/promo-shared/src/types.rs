//! Common types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_PAGE_LIMIT, DEFAULT_PAGE_OFFSET};

pub type EntityId = Uuid;

pub fn new_id() -> EntityId {
    Uuid::new_v4()
}

/// Raw pagination input. Absent, non-positive limits and absent, negative
/// offsets fall back to the defaults when resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl Pagination {
    pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
        Self { limit, offset }
    }

    /// Lenient parse of query-string values; anything unparseable counts as absent.
    pub fn parse(limit: Option<&str>, offset: Option<&str>) -> Self {
        Self {
            limit: limit.and_then(|v| v.trim().parse().ok()),
            offset: offset.and_then(|v| v.trim().parse().ok()),
        }
    }

    pub fn resolve(&self) -> Page {
        Page {
            limit: self.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_PAGE_LIMIT),
            offset: self.offset.filter(|o| *o >= 0).unwrap_or(DEFAULT_PAGE_OFFSET),
        }
    }
}

/// A resolved page window, always valid for a `LIMIT .. OFFSET ..` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: DEFAULT_PAGE_LIMIT, offset: DEFAULT_PAGE_OFFSET }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_limit_and_negative_offset_use_defaults() {
        let page = Pagination::new(Some(0), Some(-5)).resolve();
        assert_eq!(page, Pagination::new(Some(10), Some(0)).resolve());
        assert_eq!(page, Page::default());
    }

    #[test]
    fn test_explicit_values_are_kept() {
        let page = Pagination::new(Some(25), Some(50)).resolve();
        assert_eq!(page, Page { limit: 25, offset: 50 });
    }

    #[test]
    fn test_parse_ignores_garbage() {
        let page = Pagination::parse(Some("abc"), Some("-1")).resolve();
        assert_eq!(page, Page::default());

        let page = Pagination::parse(Some(" 3 "), None).resolve();
        assert_eq!(page, Page { limit: 3, offset: 0 });
    }
}
