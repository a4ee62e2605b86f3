//! HTTP-specific error types for the Webflow API SDK.
//!
//! This module contains error types for HTTP operations: non-200 responses,
//! undecodable bodies, request validation failures and network errors.
//!
//! # Error Handling
//!
//! - [`ApiError`]: The API answered with a status other than 200
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use webflow_api::clients::{HttpClient, HttpError};
//!
//! match client.get("/sites", Vec::new()).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Api(e)) => {
//!         println!("API error {}: {}", e.status, e.reason);
//!     }
//!     Err(HttpError::Decoding(e)) => println!("Bad body: {e}"),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use crate::error::DecodingError;
use serde_json::Value;
use thiserror::Error;

/// Error returned when the API answers with any status other than 200.
///
/// The parsed body is kept when the server sent JSON, so callers can read
/// Webflow's `msg`/`code` fields without a second request.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::ApiError;
///
/// let error = ApiError {
///     status: 404,
///     reason: "Not Found".to_string(),
///     body: None,
/// };
///
/// assert_eq!(error.to_string(), "Webflow API error: 404 Not Found");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Webflow API error: {status} {reason}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The canonical reason phrase for the status code (e.g. `Not Found`),
    /// or `Unknown Status` for unregistered codes.
    ///
    /// `reqwest` does not expose the reason text from the status line, so a
    /// server sending a non-standard phrase is still reported with the
    /// canonical one. The server's own explanation, when present, is in
    /// [`message`](Self::message).
    pub reason: String,
    /// The response body, when it was valid JSON.
    pub body: Option<Value>,
}

impl ApiError {
    /// Returns the server-supplied `msg` field, if present in the body.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.body.as_ref()?.get("msg")?.as_str()
    }
}

/// Error returned when an HTTP request fails validation.
///
/// Raised before the request is sent.
///
/// # Example
///
/// ```rust
/// use webflow_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::BodyNotAllowed {
///     method: "get".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot send a body with get.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The path does not start with `/`.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },

    /// A body was attached to a method that does not carry one.
    #[error("Cannot send a body with {method}.")]
    BodyNotAllowed {
        /// The HTTP method.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with a non-200 status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 200 response carried a body that could not be decoded.
    #[error(transparent)]
    Decoding(#[from] DecodingError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
