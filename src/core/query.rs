//! Pagination parameters and response envelopes
//!
//! Pages are 1-based. Requests below the floor are clamped rather than
//! rejected, so a sloppy `?page=0` never turns into an error.

use serde::{Deserialize, Serialize};

/// Pagination parameters extracted from URL query strings.
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_orders(
///     Query(page): Query<PageQuery>,
/// ) -> Json<PaginatedResponse<Order>> {
///     // page.page() defaults to 1
///     // page.limit() defaults to 20
/// }
///
/// // Usage:
/// GET /api/orders?page=2&limit=10
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageQuery {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageQuery {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, ensuring it doesn't exceed the maximum
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100) // Maximum 100 per page, minimum 1
    }

    /// Zero-based offset of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page() - 1) * self.limit()
    }
}

/// Paginated response structure
///
/// Wraps one page of data with metadata about the whole result set.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The paginated data
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    /// Wrap one page slice together with the total match count.
    pub fn new(data: Vec<T>, page: &PageQuery, total: usize) -> Self {
        let pagination = PaginationMeta::new(page.page(), page.limit(), total);
        Self { data, pagination }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PaginationMeta {
    /// Create pagination metadata from calculation
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        // Ensure limit is at least 1 to avoid division by zero
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) }; // Ceiling division
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}
