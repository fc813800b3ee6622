//! Fixed-size pagination for question lists

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// Questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize, Default)]
pub struct PageParams {
    /// Page number (1-indexed)
    pub page: Option<i64>,
}

impl PageParams {
    /// The requested page, defaulting to 1. Zero and negative pages are rejected.
    pub fn page(&self) -> ApiResult<usize> {
        match self.page {
            None => Ok(1),
            Some(page) if page >= 1 => usize::try_from(page)
                .map_err(|_| ApiError::bad_request("page is out of range")),
            Some(_) => Err(ApiError::bad_request("page must be a positive integer")),
        }
    }
}

/// Slice `[(page-1)*10, page*10)` out of an ordered result set.
///
/// Pages past the end are empty; callers decide whether that is an error.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
