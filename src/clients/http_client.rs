//! HTTP client for Webflow API communication.
//!
//! This module provides the [`HttpClient`] type, the single point of outbound
//! traffic for the SDK. It attaches authentication and version headers,
//! decodes JSON bodies, and turns every non-200 status into an [`ApiError`].

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use reqwest::StatusCode;
use serde_json::Value;

use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, PaginationInfo};
use crate::config::WebflowConfig;
use crate::error::DecodingError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Webflow API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers: bearer token, `Accept`, `accept-version`, `User-Agent`
/// - JSON decoding, with an empty body read as `{}`
/// - Recording the last request and last decoded result
///
/// Only status 200 counts as success. There is no retry or backoff.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. The last-request and last-result slots are
/// overwritten by every call, so concurrent callers observe whichever call
/// finished last.
///
/// # Example
///
/// ```rust,no_run
/// use webflow_api::{ApiToken, WebflowConfig};
/// use webflow_api::clients::HttpClient;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = WebflowConfig::builder()
///     .token(ApiToken::new("token")?)
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let sites = client.get("/sites", Vec::new()).await?;
/// println!("{sites}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    default_headers: HashMap<String, String>,
    last_request: Mutex<Option<HttpRequest>>,
    last_result: Mutex<Option<Value>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying TLS client cannot be
    /// initialized.
    pub fn new(config: &WebflowConfig) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().use_rustls_tls().build()?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a new HTTP client around an existing `reqwest::Client`.
    ///
    /// Use this to share a connection pool or to supply a client with custom
    /// timeouts or proxies.
    #[must_use]
    pub fn with_client(config: &WebflowConfig, client: reqwest::Client) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Webflow API Rust SDK v{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.token().as_ref()),
        );
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "accept-version".to_string(),
            config.api_version().to_string(),
        );
        default_headers.insert("User-Agent".to_string(), user_agent);

        Self {
            client,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
            last_request: Mutex::new(None),
            last_result: Mutex::new(None),
        }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns a copy of the most recent request, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns a copy of the most recently decoded response body, if any.
    ///
    /// Non-200 responses are recorded too; a body that was not JSON is
    /// recorded as `Value::Null`.
    #[must_use]
    pub fn last_result(&self) -> Option<Value> {
        self.last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the pagination fields of the last result, if present.
    #[must_use]
    pub fn pagination(&self) -> Option<PaginationInfo> {
        self.last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(PaginationInfo::from_body)
    }

    /// Returns `true` if the last result reports records beyond its page.
    ///
    /// Returns `false` when the last result lacks any of `total`, `limit`
    /// or `offset`.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.pagination()
            .is_some_and(|info| info.has_next_page())
    }

    /// Sends a GET request with ordered query parameters.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn get(&self, path: &str, query: Vec<(String, String)>) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, path)
            .query(query)
            .build()?;
        Ok(self.request(request).await?.body)
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.send_with_body(HttpMethod::Post, path, body, Vec::new())
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.send_with_body(HttpMethod::Put, path, body, Vec::new())
            .await
    }

    /// Sends a PATCH request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn patch(&self, path: &str, body: Value) -> Result<Value, HttpError> {
        self.send_with_body(HttpMethod::Patch, path, body, Vec::new())
            .await
    }

    /// Sends a DELETE request with ordered query parameters.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn delete(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Delete, path)
            .query(query)
            .build()?;
        Ok(self.request(request).await?.body)
    }

    /// Sends a request carrying a JSON body and query parameters.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub async fn send_with_body(
        &self,
        method: HttpMethod,
        path: &str,
        body: Value,
        query: Vec<(String, String)>,
    ) -> Result<Value, HttpError> {
        let request = HttpRequest::builder(method, path)
            .body(body)
            .query(query)
            .build()?;
        Ok(self.request(request).await?.body)
    }

    /// Sends an HTTP request to the Webflow API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - The status is anything but 200 (`Api`)
    /// - A 200 response body is not valid JSON (`Decoding`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_url, request.path);
        *self
            .last_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(request.clone());
        // Cleared up front so a network failure leaves no stale result behind.
        *self
            .last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;

        tracing::debug!(
            method = %request.http_method,
            path = %request.path,
            query = %request.query_string(),
            "Sending Webflow API request"
        );

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Patch => self.client.patch(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send().await?;

        let status = res.status();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!(status = status.as_u16(), path = %request.path, "Received Webflow API response");

        let parsed = Self::parse_body(&body_text);
        *self
            .last_result
            .lock()
            .unwrap_or_else(PoisonError::into_inner) =
            Some(parsed.as_ref().map_or(Value::Null, Clone::clone));

        if status != StatusCode::OK {
            tracing::warn!(
                status = status.as_u16(),
                method = %request.http_method,
                path = %request.path,
                "Webflow API request failed"
            );
            return Err(HttpError::Api(ApiError {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown Status")
                    .to_string(),
                body: parsed.ok(),
            }));
        }

        let body = parsed.map_err(DecodingError::InvalidJson)?;
        Ok(HttpResponse::new(status.as_u16(), res_headers, body))
    }

    fn parse_body(text: &str) -> Result<Value, serde_json::Error> {
        if text.trim().is_empty() {
            Ok(Value::Object(serde_json::Map::new()))
        } else {
            serde_json::from_str(text)
        }
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
