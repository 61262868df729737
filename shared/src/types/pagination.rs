//! Pagination types and the pagination engine for list endpoints
//!
//! Every listing flow resolves its page window through [`paginate`] so the
//! normalization rules live in exactly one place.

use serde::{Deserialize, Serialize};

/// Page number used when the requested one is absent or invalid
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the requested one is absent or invalid
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Resolved window for a single page of a list query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSlice {
    /// Number of rows to skip
    pub skip: u64,

    /// Number of rows to fetch
    pub take: u64,

    /// Total number of pages, always at least 1
    pub total_pages: u64,

    /// Resolved 1-based page number
    pub current_page: u64,
}

/// Resolve a requested page/page-size pair against a total row count.
///
/// Requested values arrive as raw numbers straight off the wire: absent
/// (`None`) and NaN inputs fall back to the defaults, anything else is
/// absolute-valued and floored before the positive check. An empty result
/// set still reports one (empty) page.
pub fn paginate(page: Option<f64>, page_size: Option<f64>, total_count: u64) -> PageSlice {
    let current_page = resolve_page(page);
    let take = resolve_page_size(page_size);
    let skip = current_page.saturating_sub(1).saturating_mul(take);
    let total_pages = total_pages(total_count, take);

    PageSlice {
        skip,
        take,
        total_pages,
        current_page,
    }
}

/// Normalize a raw numeric input: NaN counts as absent, everything else is
/// absolute-valued and floored.
fn normalize(value: Option<f64>) -> Option<u64> {
    let value = value?;
    if value.is_nan() {
        return None;
    }
    Some(value.abs().floor() as u64)
}

fn resolve_page(page: Option<f64>) -> u64 {
    match normalize(page) {
        Some(p) if p > 0 => p,
        _ => DEFAULT_PAGE,
    }
}

fn resolve_page_size(page_size: Option<f64>) -> u64 {
    match normalize(page_size) {
        Some(ps) if ps > 0 => ps,
        _ => DEFAULT_PAGE_SIZE,
    }
}

/// `take` is always positive here, so the division is safe.
fn total_pages(total_count: u64, take: u64) -> u64 {
    ((total_count + take - 1) / take).max(1)
}

/// Pagination metadata returned alongside a page of data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of rows across all pages
    pub total_count: u64,

    /// Resolved 1-based page number
    pub current_page: u64,

    /// Number of rows per page
    pub page_size: u64,

    /// Total number of pages, always at least 1
    pub total_pages: u64,
}

/// Paginated response wrapper with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The actual data items
    pub data: Vec<T>,

    /// Pagination metadata
    pub meta: PageMeta,
}

impl<T> PaginatedResponse<T> {
    /// Compose a page of rows with the metadata of its resolved slice
    pub fn new(data: Vec<T>, slice: PageSlice, total_count: u64) -> Self {
        Self {
            data,
            meta: PageMeta {
                total_count,
                current_page: slice.current_page,
                page_size: slice.take,
                total_pages: slice.total_pages,
            },
        }
    }

    /// Transform the data items using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }

    /// Check if the page holds no rows
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
