//! HTTP client types for Webflow API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the Webflow API.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`PaginationInfo`]: `total`/`limit`/`offset` read from a list response
//! - [`ApiError`]: A non-200 response
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/collections/abc/items")
//!     .query_param("limit", "100")
//!     .query_param("offset", "0")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! if client.has_next_page() {
//!     // fetch the next page
//! }
//! ```
//!
//! # Failure Semantics
//!
//! A response is successful only when its status is exactly 200. Every other
//! status is returned as [`HttpError::Api`] carrying the status, its
//! canonical reason phrase, and the decoded body when it was JSON. Requests
//! are never retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, PaginationInfo, RateLimit};
