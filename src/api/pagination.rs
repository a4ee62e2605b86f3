//! Offset pagination for list endpoints.

use crate::config::PageSize;

/// Builds the `limit`/`offset` query for a 1-based page number.
///
/// Page 0 is treated as page 1.
///
/// # Example
///
/// ```rust
/// use webflow_api::api::page_query;
/// use webflow_api::PageSize;
///
/// let query = page_query(2, PageSize::default());
/// assert_eq!(
///     query,
///     vec![
///         ("limit".to_string(), "100".to_string()),
///         ("offset".to_string(), "100".to_string()),
///     ]
/// );
/// ```
#[must_use]
pub fn page_query(page: u32, page_size: PageSize) -> Vec<(String, String)> {
    let limit = u64::from(page_size.get());
    let offset = u64::from(page.saturating_sub(1)) * limit;
    vec![
        ("limit".to_string(), limit.to_string()),
        ("offset".to_string(), offset.to_string()),
    ]
}
