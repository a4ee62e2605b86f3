//! HTTP response types for the Webflow API SDK.
//!
//! This module provides the [`HttpResponse`] type and related types for
//! parsing and accessing API response data.

use std::collections::HashMap;

use serde_json::Value;

/// Rate limit information parsed from the `X-RateLimit-Limit` and
/// `X-RateLimit-Remaining` headers.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::RateLimit;
///
/// let limit = RateLimit::parse("60", "59").unwrap();
/// assert_eq!(limit.limit, 60);
/// assert_eq!(limit.remaining, 59);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per window.
    pub limit: u32,
    /// Requests left in the current window.
    pub remaining: u32,
}

impl RateLimit {
    /// Parses the two header values.
    ///
    /// Returns `None` if either value is not an unsigned integer.
    #[must_use]
    pub fn parse(limit: &str, remaining: &str) -> Option<Self> {
        Some(Self {
            limit: limit.trim().parse().ok()?,
            remaining: remaining.trim().parse().ok()?,
        })
    }
}

/// Offset pagination fields reported in a list response body.
///
/// Webflow list endpoints return `total`, `limit` and `offset` alongside
/// the page of results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationInfo {
    /// Total number of records across all pages.
    pub total: u64,
    /// Page size used for this response.
    pub limit: u64,
    /// Number of records skipped before this page.
    pub offset: u64,
}

impl PaginationInfo {
    /// Reads pagination fields from a response body.
    ///
    /// Returns `None` unless `total`, `limit` and `offset` are all present
    /// as unsigned integers.
    ///
    /// # Example
    ///
    /// ```rust
    /// use webflow_api::clients::PaginationInfo;
    /// use serde_json::json;
    ///
    /// let info = PaginationInfo::from_body(&json!({"total": 250, "limit": 100, "offset": 100}));
    /// assert!(info.unwrap().has_next_page());
    ///
    /// assert!(PaginationInfo::from_body(&json!({"total": 250})).is_none());
    /// ```
    #[must_use]
    pub fn from_body(body: &Value) -> Option<Self> {
        Some(Self {
            total: body.get("total")?.as_u64()?,
            limit: body.get("limit")?.as_u64()?,
            offset: body.get("offset")?.as_u64()?,
        })
    }

    /// Returns `true` if records remain beyond this page.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.total > self.limit.saturating_add(self.offset)
    }
}

/// An HTTP response from the Webflow API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: Value,
    /// Rate limit information, when both headers are present.
    pub rate_limit: Option<RateLimit>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Value) -> Self {
        let header = |name: &str| headers.get(name).and_then(|values| values.first());
        let rate_limit = match (header("x-ratelimit-limit"), header("x-ratelimit-remaining")) {
            (Some(limit), Some(remaining)) => RateLimit::parse(limit, remaining),
            _ => None,
        };

        Self {
            code,
            headers,
            body,
            rate_limit,
        }
    }

    /// Returns `true` only for status 200.
    ///
    /// Every other status, including other 2xx codes, is a failure.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the pagination fields of the body, if present.
    #[must_use]
    pub fn pagination(&self) -> Option<PaginationInfo> {
        PaginationInfo::from_body(&self.body)
    }
}
