//! The [`Webflow`] gateway: one async method per API operation.
//!
//! Methods come in two flavours. `list_*`/`get_*`/mutating methods return the
//! decoded JSON body as a [`serde_json::Value`]; hydrated variants named after
//! the resource (`sites`, `site`, `items`, ...) return typed entities from
//! [`crate::entities`].
//!
//! # Request Conventions
//!
//! - Paginated lists send `limit` then `offset`, derived from the page number
//!   and the gateway's page size.
//! - Item, product and SKU writes fill in `_draft: false` and
//!   `_archived: false` when the caller leaves them out.
//! - Item writes with `live = true` send `live=true` as the only query
//!   parameter.
//! - Webhook triggers and order/inventory update fields are checked against
//!   fixed allow-lists before any request is sent.
//!
//! # Example
//!
//! ```rust,no_run
//! use webflow_api::{ApiToken, Webflow, WebflowConfig};
//!
//! # async fn run() -> Result<(), webflow_api::Error> {
//! let config = WebflowConfig::builder()
//!     .token(ApiToken::new("token")?)
//!     .build()?;
//! let webflow = Webflow::new(config)?;
//!
//! for site in webflow.sites().await? {
//!     println!("{} ({})", site.name(), site.id());
//! }
//! # Ok(())
//! # }
//! ```

mod account;
mod collections;
mod items;
mod orders;
mod pagination;
mod products;
mod sites;
mod webhooks;

pub use pagination::page_query;

use serde_json::{Map, Value};

use crate::clients::{HttpClient, HttpRequest, PaginationInfo};
use crate::config::{PageSize, WebflowConfig};
use crate::error::{ConfigError, Error};

/// A JSON object of caller-defined fields.
pub type Fields = Map<String, Value>;

/// Entry point to the Webflow API.
///
/// `Webflow` is `Send + Sync`; share it behind an `Arc` or by reference.
/// Entities hydrated from it borrow it for lazy fetches.
#[derive(Debug)]
pub struct Webflow {
    client: HttpClient,
    page_size: PageSize,
}

// Verify Webflow is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Webflow>();
};

impl Webflow {
    /// Creates a gateway with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] if the TLS client cannot be initialized.
    pub fn new(config: WebflowConfig) -> Result<Self, Error> {
        Ok(Self {
            client: HttpClient::new(&config)?,
            page_size: config.page_size(),
        })
    }

    /// Creates a gateway around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(config: WebflowConfig, client: reqwest::Client) -> Self {
        Self {
            client: HttpClient::with_client(&config, client),
            page_size: config.page_size(),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.client
    }

    /// Returns the number of records requested per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size.get()
    }

    /// Sets the number of records requested per page.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPageSize`] if `size` is outside
    /// `1..=100`; the current page size is kept.
    pub fn set_page_size(&mut self, size: u32) -> Result<(), ConfigError> {
        self.page_size = PageSize::new(i64::from(size))?;
        tracing::debug!(page_size = size, "Page size updated");
        Ok(())
    }

    /// Returns `true` if the last list response reports more records.
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.client.has_next_page()
    }

    /// Returns the pagination fields of the last response, if present.
    #[must_use]
    pub fn pagination(&self) -> Option<PaginationInfo> {
        self.client.pagination()
    }

    /// Returns the body of the last response, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<Value> {
        self.client.last_result()
    }

    /// Returns the last request sent, if any.
    #[must_use]
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.client.last_request()
    }

    fn page(&self, page: u32) -> Vec<(String, String)> {
        page_query(page, self.page_size)
    }
}

/// Percent-encodes one caller-supplied path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

/// Fills in `_draft` and `_archived` as `false` unless the caller set them.
pub(crate) fn with_defaults(mut fields: Fields) -> Fields {
    for flag in ["_draft", "_archived"] {
        fields
            .entry(flag)
            .or_insert(Value::Bool(false));
    }
    fields
}

pub(crate) fn live_query(live: bool) -> Vec<(String, String)> {
    if live {
        vec![("live".to_string(), "true".to_string())]
    } else {
        Vec::new()
    }
}
