//! Configuration types for the Webflow API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with Webflow.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`WebflowConfig`]: The main configuration struct holding all SDK settings
//! - [`WebflowConfigBuilder`]: A builder for constructing [`WebflowConfig`] instances
//! - [`ApiToken`]: A validated API token newtype with masked debug output
//! - [`BaseUrl`]: A validated API base URL
//! - [`PageSize`]: A page size in the accepted `1..=100` range
//! - [`ApiVersion`]: The value of the `accept-version` header
//!
//! # Example
//!
//! ```rust
//! use webflow_api::{ApiToken, PageSize, WebflowConfig};
//!
//! let config = WebflowConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .page_size(PageSize::new(50).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.page_size().get(), 50);
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiToken, BaseUrl, PageSize};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// Configuration for the Webflow API SDK.
///
/// # Thread Safety
///
/// `WebflowConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use webflow_api::{ApiToken, BaseUrl, WebflowConfig};
///
/// let config = WebflowConfig::builder()
///     .token(ApiToken::new("your-token").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "http://localhost:8080");
/// ```
#[derive(Clone, Debug)]
pub struct WebflowConfig {
    token: ApiToken,
    base_url: BaseUrl,
    page_size: PageSize,
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
}

impl WebflowConfig {
    /// Creates a new builder for constructing a `WebflowConfig`.
    #[must_use]
    pub fn builder() -> WebflowConfigBuilder {
        WebflowConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the initial page size for paginated list calls.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify WebflowConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WebflowConfig>();
};

/// Builder for constructing [`WebflowConfig`] instances.
///
/// The only required field is `token`.
///
/// # Defaults
///
/// - `base_url`: `https://api.webflow.com`
/// - `page_size`: 100
/// - `api_version`: Latest known version (`1.0.0`)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct WebflowConfigBuilder {
    token: Option<ApiToken>,
    base_url: Option<BaseUrl>,
    page_size: Option<PageSize>,
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
}

impl WebflowConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API base URL.
    ///
    /// Useful for proxies and for pointing the SDK at a local test server.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the page size for paginated list calls.
    #[must_use]
    pub const fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`WebflowConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<WebflowConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(WebflowConfig {
            token,
            base_url: self.base_url.unwrap_or_default(),
            page_size: self.page_size.unwrap_or_default(),
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_token() {
        let result = WebflowConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = WebflowConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://api.webflow.com");
        assert_eq!(config.page_size().get(), 100);
        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = WebflowConfig::builder()
            .token(ApiToken::new("token").unwrap())
            .base_url(BaseUrl::new("http://127.0.0.1:9000").unwrap())
            .page_size(PageSize::new(10).unwrap())
            .api_version("1.1.0".parse().unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.base_url().as_ref(), "http://127.0.0.1:9000");
        assert_eq!(config.page_size().get(), 10);
        assert_eq!(config.api_version().to_string(), "1.1.0");
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = WebflowConfig::builder()
            .token(ApiToken::new("do-not-print").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("WebflowConfig"));
        assert!(!debug_str.contains("do-not-print"));
    }
}
