//! HTTP request types for the Webflow API SDK.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Webflow API.

use std::fmt;

use serde_json::Value;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Webflow API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for replacing resources.
    Put,
    /// HTTP PATCH method for partially updating resources.
    Patch,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method may carry a JSON body.
    #[must_use]
    pub const fn allows_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// An HTTP request to be sent to the Webflow API.
///
/// Query parameters are kept in insertion order, so a request built with
/// `limit` then `offset` is sent as `?limit=..&offset=..`.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/collections/abc/items")
///     .query_param("limit", "100")
///     .query_param("offset", "0")
///     .build()
///     .unwrap();
/// assert_eq!(get_request.query_string(), "limit=100&offset=0");
///
/// let patch_request = HttpRequest::builder(HttpMethod::Patch, "/sites/abc/orders/1")
///     .body(json!({"fields": {"comment": "Shipped"}}))
///     .build()
///     .unwrap();
/// assert!(patch_request.body.is_some());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the base URL) for this request.
    pub path: String,
    /// The JSON request body, if any.
    pub body: Option<Value>,
    /// Ordered query parameters to append to the URL.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `path` does not start with `/`
    /// - a body is attached to a GET or DELETE request
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if !self.path.starts_with('/') {
            return Err(InvalidHttpRequestError::InvalidPath {
                path: self.path.clone(),
            });
        }

        if self.body.is_some() && !self.http_method.allows_body() {
            return Err(InvalidHttpRequestError::BodyNotAllowed {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the percent-encoded query string, without the leading `?`.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<Value>,
    query: Vec<(String, String)>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replaces all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            query: self.query,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Patch.to_string(), "patch");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_builder_creates_valid_get_request() {
        let request = HttpRequest::builder(HttpMethod::Get, "/sites")
            .build()
            .unwrap();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.path, "/sites");
        assert!(request.body.is_none());
        assert!(request.query.is_empty());
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        // Action endpoints such as /unfulfill are posted with an empty object
        // by callers, but the transport itself does not insist on a body.
        let request = HttpRequest::builder(HttpMethod::Post, "/sites/abc/publish").build();
        assert!(request.is_ok());
    }

    #[test]
    fn test_verify_rejects_relative_path() {
        let result = HttpRequest::builder(HttpMethod::Get, "sites").build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::InvalidPath { path }) if path == "sites"
        ));
    }

    #[test]
    fn test_verify_rejects_body_on_get_and_delete() {
        for method in [HttpMethod::Get, HttpMethod::Delete] {
            let result = HttpRequest::builder(method, "/sites")
                .body(json!({"a": 1}))
                .build();
            assert!(matches!(
                result,
                Err(InvalidHttpRequestError::BodyNotAllowed { .. })
            ));
        }
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "/collections/foo/items")
            .query_param("limit", "100")
            .query_param("offset", "100")
            .build()
            .unwrap();

        assert_eq!(
            request.query,
            vec![
                ("limit".to_string(), "100".to_string()),
                ("offset".to_string(), "100".to_string()),
            ]
        );
        assert_eq!(request.query_string(), "limit=100&offset=100");
    }

    #[test]
    fn test_query_string_percent_encodes_values() {
        let request = HttpRequest::builder(HttpMethod::Get, "/x")
            .query_param("name", "a b&c")
            .build()
            .unwrap();
        assert_eq!(request.query_string(), "name=a%20b%26c");
    }
}
