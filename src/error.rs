//! Error types for the Webflow API SDK.
//!
//! This module contains the crate-level [`Error`] type along with the error
//! types raised before a request is sent ([`ConfigError`], [`ValidationError`])
//! and while interpreting a response ([`DecodingError`]).
//!
//! # Error Handling
//!
//! Every fallible SDK operation returns `Result<T, Error>`. Errors are never
//! retried, logged-and-ignored or partially applied: a call either fully
//! succeeds (HTTP 200 with a parsed body) or fully fails.
//!
//! - [`ConfigError`]: invalid SDK configuration, detected when it is set
//! - [`ValidationError`]: a local allow-list check failed; no request was sent
//! - [`DecodingError`]: a body was not JSON or a required field could not be read
//! - [`HttpError`]: transport failures, including non-200 responses
//!   ([`ApiError`](crate::clients::ApiError))
//!
//! # Example
//!
//! ```rust
//! use webflow_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use crate::clients::{ApiError, HttpError};
use thiserror::Error;

/// Errors that can occur during SDK configuration.
///
/// Configuration errors are raised at the point a value is configured, never
/// at call time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Webflow API token.")]
    EmptyApiToken,

    /// Page size is outside the accepted range.
    #[error("Invalid page size {size}. Page size must be between {min} and {max}.")]
    InvalidPageSize {
        /// The rejected page size.
        size: i64,
        /// Smallest accepted page size.
        min: u32,
        /// Largest accepted page size.
        max: u32,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.webflow.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected a dotted version such as '1.0.0'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// A locally checked invariant failed before any request was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One or more tokens are not members of a fixed allow-list.
    #[error("Invalid {rule}: {}. Allowed values are: {}.", .invalid.join(", "), .allowed.join(", "))]
    NotAllowed {
        /// The allow-list that rejected the tokens (e.g., "order update field").
        rule: &'static str,
        /// The rejected tokens, in input order.
        invalid: Vec<String>,
        /// The full allow-list.
        allowed: Vec<&'static str>,
    },

    /// The operation needs a server-assigned id that the local value lacks.
    #[error("{entity} has no id; it must be saved before this operation")]
    MissingId {
        /// The entity type name.
        entity: &'static str,
    },
}

/// A response body could not be interpreted.
#[derive(Debug, Error)]
pub enum DecodingError {
    /// The response body is not valid JSON.
    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A required field is missing or has the wrong JSON type.
    #[error("{entity} is missing required field '{field}'")]
    MissingField {
        /// The entity being decoded.
        entity: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// A timestamp field could not be parsed.
    #[error("Field '{field}' has an invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        /// The timestamp field.
        field: &'static str,
        /// The raw value received.
        value: String,
        /// The underlying parse failure.
        source: chrono::ParseError,
    },

    /// A time zone field is not a known IANA zone name.
    #[error("Unknown time zone '{value}'")]
    InvalidTimezone {
        /// The raw value received.
        value: String,
    },

    /// The response is not shaped like the expected entity or list.
    #[error("Unexpected response shape for {entity}: expected {expected}")]
    UnexpectedShape {
        /// The entity being decoded.
        entity: &'static str,
        /// Description of the expected shape.
        expected: &'static str,
    },
}

/// Unified error type for all SDK operations.
///
/// # Example
///
/// ```rust,ignore
/// use webflow_api::Error;
///
/// match webflow.update_order("site", "order", fields).await {
///     Ok(order) => println!("Updated: {order}"),
///     Err(Error::Validation(e)) => println!("Rejected locally: {e}"),
///     Err(e) if e.status() == Some(404) => println!("No such order"),
///     Err(e) => println!("Failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure, including non-200 responses.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A local allow-list check failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A response could not be hydrated into an entity.
    #[error(transparent)]
    Decoding(#[from] DecodingError),
}

impl Error {
    /// Returns the [`ApiError`] if this error is a non-200 response.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Http(HttpError::Api(e)) => Some(e),
            _ => None,
        }
    }

    /// Returns the HTTP status code if this error is a non-200 response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    /// Returns `true` if this error was raised by a local validation rule.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Verify Error is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
};
