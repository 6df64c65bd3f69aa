//! Pagination helpers shared by the repository layer.
//!
//! List endpoints use a 1-based page number plus a page size. These helpers
//! normalize user input; they deliberately do NOT cap the page size, only
//! clamp both values so the resulting LIMIT/OFFSET are well formed.

/// Default page size when the client omits `page_size`.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Clamp a user-provided page number to 1-based.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Clamp a user-provided page size to at least 1, defaulting if absent.
pub fn clamp_page_size(page_size: Option<i64>) -> i64 {
    page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
}

/// Row offset for a clamped (page, page_size) pair.
pub fn page_offset(page: i64, page_size: i64) -> i64 {
    (page - 1) * page_size
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults_to_first() {
        assert_eq!(clamp_page(None), 1);
    }

    #[test]
    fn page_clamps_to_one() {
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-7)), 1);
        assert_eq!(clamp_page(Some(3)), 3);
    }

    #[test]
    fn page_size_defaults_and_clamps() {
        assert_eq!(clamp_page_size(None), DEFAULT_PAGE_SIZE);
        assert_eq!(clamp_page_size(Some(0)), 1);
        assert_eq!(clamp_page_size(Some(10)), 10);
    }

    #[test]
    fn page_size_has_no_upper_bound() {
        assert_eq!(clamp_page_size(Some(100_000)), 100_000);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(2, 10), 10);
        assert_eq!(page_offset(3, 25), 50);
    }
}
