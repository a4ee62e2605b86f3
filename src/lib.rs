//! # Webflow API Rust SDK
//!
//! An async Rust SDK for the Webflow Data API: sites, CMS collections and
//! items, e-commerce products, SKUs, inventory and orders, and webhooks.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`WebflowConfig`] and [`WebflowConfigBuilder`]
//! - Validated newtypes for the API token, base URL, page size and API version
//! - The [`Webflow`] gateway with one async method per API operation
//! - Typed entities ([`Site`], [`Collection`], [`Item`], [`Webhook`],
//!   [`Order`], [`Product`]) hydrated from responses
//! - Offset pagination with [`Webflow::has_next_page`]
//! - Local allow-list checks for webhook triggers and order/inventory updates
//!
//! ## Quick Start
//!
//! ```rust
//! use webflow_api::{ApiToken, Webflow, WebflowConfig};
//!
//! let config = WebflowConfig::builder()
//!     .token(ApiToken::new("your-api-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let webflow = Webflow::new(config).unwrap();
//! assert_eq!(webflow.page_size(), 100);
//! ```
//!
//! ## Working With Items
//!
//! ```rust,no_run
//! use serde_json::json;
//! use webflow_api::{Fields, Webflow};
//!
//! # async fn run(webflow: &Webflow) -> Result<(), webflow_api::Error> {
//! let mut page = 1;
//! loop {
//!     for item in webflow.items("collection-id", page).await? {
//!         println!("{}", item.id());
//!     }
//!     if !webflow.has_next_page() {
//!         break;
//!     }
//!     page += 1;
//! }
//!
//! // `_draft` and `_archived` default to false when omitted.
//! let fields: Fields = json!({"name": "Hello", "slug": "hello"})
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//! webflow.create_item("collection-id", fields, true).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<T, `[`Error`]`>`. Only HTTP 200 is a
//! success; any other status surfaces as an [`ApiError`] carrying the status,
//! its reason phrase and the JSON body when there was one. Allow-list
//! failures surface as [`ValidationError`] before any request is sent.
//!
//! ## Logging
//!
//! The SDK emits [`tracing`] events: `debug` for every request and response,
//! `info` for destructive or publishing calls, and `warn` for non-200
//! responses. Install any `tracing` subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and allow-lists reject bad input before I/O
//! - **Thread-safe**: The gateway and transport are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **No hidden retries**: Each call is exactly one request

pub mod api;
pub mod clients;
pub mod config;
pub mod entities;
pub mod error;
pub mod validation;

// Re-export public types at crate root for convenience
pub use api::{Fields, Webflow};
pub use config::{ApiToken, ApiVersion, BaseUrl, PageSize, WebflowConfig, WebflowConfigBuilder};
pub use entities::{Collection, Domain, Item, Order, Product, Site, Webhook};
pub use error::{ConfigError, DecodingError, Error, ValidationError};

// Re-export HTTP client types
pub use clients::{
    ApiError, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, PaginationInfo,
};
