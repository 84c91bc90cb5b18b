/**
 * Offset Pagination
 *
 * Query parameters shared by the list endpoints. Non-positive or missing
 * values fall back to the defaults (page 1, 10 items).
 */

use serde::Deserialize;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_LIMIT: i64 = 10;

/// `?page=&limit=` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl Pagination {
    /// Effective page size.
    pub fn limit(&self) -> i64 {
        match self.limit {
            Some(limit) if limit > 0 => limit,
            _ => DEFAULT_LIMIT,
        }
    }

    /// Row offset for the requested page.
    ///
    /// Saturates instead of overflowing: `page` comes straight from the
    /// query string, so arithmetic here must not panic or wrap negative.
    pub fn offset(&self) -> i64 {
        let page = match self.page {
            Some(page) if page > 0 => page,
            _ => DEFAULT_PAGE,
        };
        page.saturating_sub(1).saturating_mul(self.limit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = Pagination::default();
        assert_eq!(p.limit(), 10);
        assert_eq!(p.offset(), 0);
    }

    #[test]
    fn test_page_offset() {
        let p = Pagination {
            page: Some(3),
            limit: Some(25),
        };
        assert_eq!(p.limit(), 25);
        assert_eq!(p.offset(), 50);
    }

    #[test]
    fn test_extreme_page_saturates_instead_of_overflowing() {
        let p = Pagination {
            page: Some(i64::MAX),
            limit: Some(10),
        };
        assert_eq!(p.offset(), i64::MAX);

        let p = Pagination {
            page: Some(i64::MAX),
            limit: Some(i64::MAX),
        };
        assert_eq!(p.offset(), i64::MAX);
    }

    #[test]
    fn test_non_positive_values_fall_back() {
        let p = Pagination {
            page: Some(0),
            limit: Some(-5),
        };
        assert_eq!(p.limit(), 10);
        assert_eq!(p.offset(), 0);
    }
}
