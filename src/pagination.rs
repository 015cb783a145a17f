use serde::Deserialize;
use thiserror::Error;
use utoipa::IntoParams;

/// Page number used when the caller supplies none
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller supplies none
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Upper bound applied to caller-supplied page sizes
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters extracted from the query string
/// Both fields are optional; absent values fall back to defaults
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page number (1-indexed, defaults to 1)
    pub page: Option<u32>,
    /// Items per page (defaults to 10, capped at 100)
    #[serde(rename = "pageSize")]
    pub page_size: Option<u32>,
}

/// Validated pagination with offset/limit arithmetic applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed, positive)
    pub page: u32,
    /// Items per page (positive, at most MAX_PAGE_SIZE)
    pub page_size: u32,
}

impl Pagination {
    /// Number of rows to skip before the first returned row
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    /// Maximum number of rows to return
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Total number of pages needed to hold `total` items
    /// An empty collection has zero pages
    pub fn total_pages(&self, total: i64) -> u32 {
        let total = total.max(0) as u64;
        total.div_ceil(u64::from(self.page_size)) as u32
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct PaginationError {
    pub message: String,
}

/// Pagination parameter validator
pub struct PageValidator;

impl PageValidator {
    /// Validates and normalizes pagination parameters
    /// Absent values default; zero is rejected; page size is capped
    pub fn validate(params: PageParams) -> Result<Pagination, PaginationError> {
        let page = match params.page {
            Some(0) => {
                return Err(PaginationError {
                    message: "page must be a positive number (greater than 0)".to_string(),
                })
            }
            Some(p) => p,
            None => DEFAULT_PAGE,
        };

        let page_size = match params.page_size {
            Some(0) => {
                return Err(PaginationError {
                    message: "pageSize must be a positive number (greater than 0)".to_string(),
                })
            }
            Some(s) => s.min(MAX_PAGE_SIZE),
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Pagination { page, page_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults_applied_when_absent() {
        let page = PageValidator::validate(PageParams::default()).unwrap();
        assert_eq!(page.page, DEFAULT_PAGE);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_explicit_values_kept() {
        let page = PageValidator::validate(PageParams {
            page: Some(3),
            page_size: Some(25),
        })
        .unwrap();
        assert_eq!(page.page, 3);
        assert_eq!(page.page_size, 25);
    }

    #[test]
    fn test_zero_page_rejected() {
        let result = PageValidator::validate(PageParams {
            page: Some(0),
            page_size: None,
        });
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("page"));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = PageValidator::validate(PageParams {
            page: None,
            page_size: Some(0),
        });
        assert!(result.is_err());
        assert!(result.unwrap_err().message.contains("pageSize"));
    }

    #[test]
    fn test_page_size_capped() {
        let page = PageValidator::validate(PageParams {
            page: None,
            page_size: Some(5000),
        })
        .unwrap();
        assert_eq!(page.page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_offset_arithmetic() {
        let page = Pagination {
            page: 2,
            page_size: 2,
        };
        assert_eq!(page.offset(), 2);
        assert_eq!(page.limit(), 2);
    }

    #[test]
    fn test_total_pages_for_five_items_of_two() {
        let page = Pagination {
            page: 2,
            page_size: 2,
        };
        assert_eq!(page.total_pages(5), 3);
    }

    #[test]
    fn test_total_pages_empty_collection() {
        let page = Pagination {
            page: 1,
            page_size: 10,
        };
        assert_eq!(page.total_pages(0), 0);
    }

    proptest! {
        /// Pages are large enough to hold every item
        #[test]
        fn prop_total_pages_covers_all_items(total in 0i64..1_000_000, page_size in 1u32..=MAX_PAGE_SIZE) {
            let page = Pagination { page: 1, page_size };
            let pages = page.total_pages(total);
            prop_assert!(i64::from(pages) * i64::from(page_size) >= total);
        }

        /// No trailing empty page is reported
        #[test]
        fn prop_total_pages_has_no_empty_tail(total in 1i64..1_000_000, page_size in 1u32..=MAX_PAGE_SIZE) {
            let page = Pagination { page: 1, page_size };
            let pages = page.total_pages(total);
            prop_assert!(i64::from(pages - 1) * i64::from(page_size) < total);
        }

        /// Offset always lands on the first item of the requested page
        #[test]
        fn prop_offset_is_page_aligned(page_no in 1u32..10_000, page_size in 1u32..=MAX_PAGE_SIZE) {
            let page = Pagination { page: page_no, page_size };
            prop_assert_eq!(page.offset(), i64::from(page_no - 1) * i64::from(page_size));
        }
    }
}
