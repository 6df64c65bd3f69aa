//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?page=&page_size=`).
///
/// `page` is 1-based. Values are clamped in `focusflow_core::pagination`
/// by the repository layer; this layer enforces no upper bound.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}
