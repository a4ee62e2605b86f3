//! Sites and their lazily fetched children.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde_json::Value;

use crate::entities::{
    object, optional_str, required_str, required_timestamp, Collection, Order, Product, Webhook,
};
use crate::error::{DecodingError, Error};
use crate::Webflow;

/// A custom domain attached to a site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain {
    id: String,
    name: String,
}

impl Domain {
    const ENTITY: &'static str = "Domain";

    /// Hydrates a domain from an API record.
    ///
    /// # Errors
    ///
    /// Returns [`DecodingError::MissingField`] if `_id` or `name` is absent.
    pub fn from_value(value: &Value) -> Result<Self, DecodingError> {
        let map = object(value, Self::ENTITY)?;
        Ok(Self {
            id: required_str(map, Self::ENTITY, "_id")?,
            name: required_str(map, Self::ENTITY, "name")?,
        })
    }

    /// Returns the domain id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the host name, e.g. `www.example.com`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A Webflow site.
///
/// Related records (domains, webhooks, collections, orders, products) are
/// fetched on first access and memoized on the instance. Reading them again
/// returns the cached value; the matching `refresh_*` method always
/// refetches, and `cached_*` peeks without any I/O.
///
/// Caching needs `&mut self`, so sharing a `Site` across tasks requires
/// external synchronization.
///
/// # Example
///
/// ```rust,no_run
/// # async fn run(webflow: &webflow_api::Webflow) -> Result<(), webflow_api::Error> {
/// let mut site = webflow.site("580e63e98c9a982ac9b8b741").await?;
///
/// let first = site.domains().await?.len(); // fetches
/// let again = site.domains().await?.len(); // cached
/// assert_eq!(first, again);
///
/// site.refresh_domains().await?; // fetches again
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Site<'a> {
    webflow: &'a Webflow,
    id: String,
    created_on: DateTime<Utc>,
    name: String,
    short_name: String,
    timezone: Tz,
    database: Option<String>,
    domains: Option<Vec<Domain>>,
    webhooks: Option<Vec<Webhook<'a>>>,
    collections: Option<Vec<Collection<'a>>>,
    orders: Option<Vec<Order>>,
    products: Option<Vec<Product>>,
}

impl<'a> Site<'a> {
    const ENTITY: &'static str = "Site";

    /// Hydrates a site from an API record. No related data is fetched.
    ///
    /// # Errors
    ///
    /// Returns [`DecodingError`] if a required field is missing,
    /// `createdOn` does not parse, or `timezone` is not an IANA zone name.
    pub fn from_value(webflow: &'a Webflow, value: &Value) -> Result<Self, DecodingError> {
        let map = object(value, Self::ENTITY)?;
        Ok(Self {
            webflow,
            id: required_str(map, Self::ENTITY, "_id")?,
            created_on: required_timestamp(map, Self::ENTITY, "createdOn")?,
            name: required_str(map, Self::ENTITY, "name")?,
            short_name: required_str(map, Self::ENTITY, "shortName")?,
            timezone: parse_timezone(&required_str(map, Self::ENTITY, "timezone")?)?,
            database: optional_str(map, "database"),
            domains: None,
            webhooks: None,
            collections: None,
            orders: None,
            products: None,
        })
    }

    /// Returns the site id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns when the site was created.
    #[must_use]
    pub const fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    /// Returns the site name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the site short name (its subdomain slug).
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Returns the IANA time zone name, e.g. `America/Los_Angeles`.
    #[must_use]
    pub fn timezone(&self) -> &str {
        self.timezone.name()
    }

    /// Returns the site's time zone.
    #[must_use]
    pub const fn tz(&self) -> Tz {
        self.timezone
    }

    /// Returns the database id, if reported.
    #[must_use]
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// Publishes the site to the given custom domains.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn publish(&self, domains: &[&str]) -> Result<Value, Error> {
        self.webflow.publish_site(&self.id, domains).await
    }

    /// Returns the site's domains, fetching them on first access.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails.
    pub async fn domains(&mut self) -> Result<&[Domain], Error> {
        if self.domains.is_none() {
            self.refresh_domains().await?;
        }
        Ok(self.domains.as_deref().unwrap_or_default())
    }

    /// Refetches the site's domains and replaces the cached value.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails; the cache is left unchanged.
    pub async fn refresh_domains(&mut self) -> Result<&[Domain], Error> {
        let domains = self.webflow.domains(&self.id).await?;
        Ok(self.domains.insert(domains).as_slice())
    }

    /// Returns the cached domains without fetching.
    #[must_use]
    pub fn cached_domains(&self) -> Option<&[Domain]> {
        self.domains.as_deref()
    }

    /// Returns the site's webhooks, fetching them on first access.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails.
    pub async fn webhooks(&mut self) -> Result<&[Webhook<'a>], Error> {
        if self.webhooks.is_none() {
            self.refresh_webhooks().await?;
        }
        Ok(self.webhooks.as_deref().unwrap_or_default())
    }

    /// Refetches the site's webhooks and replaces the cached value.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails; the cache is left unchanged.
    pub async fn refresh_webhooks(&mut self) -> Result<&[Webhook<'a>], Error> {
        let webhooks = self.webflow.webhooks(&self.id).await?;
        Ok(self.webhooks.insert(webhooks).as_slice())
    }

    /// Returns the cached webhooks without fetching.
    #[must_use]
    pub fn cached_webhooks(&self) -> Option<&[Webhook<'a>]> {
        self.webhooks.as_deref()
    }

    /// Returns the site's collections, fetching them on first access.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails.
    pub async fn collections(&mut self) -> Result<&[Collection<'a>], Error> {
        if self.collections.is_none() {
            self.refresh_collections().await?;
        }
        Ok(self.collections.as_deref().unwrap_or_default())
    }

    /// Refetches the site's collections and replaces the cached value.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails; the cache is left unchanged.
    pub async fn refresh_collections(&mut self) -> Result<&[Collection<'a>], Error> {
        let collections = self.webflow.collections(&self.id).await?;
        Ok(self.collections.insert(collections).as_slice())
    }

    /// Returns the cached collections without fetching.
    #[must_use]
    pub fn cached_collections(&self) -> Option<&[Collection<'a>]> {
        self.collections.as_deref()
    }

    /// Returns the first page of the site's orders, fetching it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails.
    pub async fn orders(&mut self) -> Result<&[Order], Error> {
        if self.orders.is_none() {
            self.refresh_orders().await?;
        }
        Ok(self.orders.as_deref().unwrap_or_default())
    }

    /// Refetches the first page of orders and replaces the cached value.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails; the cache is left unchanged.
    pub async fn refresh_orders(&mut self) -> Result<&[Order], Error> {
        let orders = self.webflow.orders(&self.id, 1).await?;
        Ok(self.orders.insert(orders).as_slice())
    }

    /// Returns the cached orders without fetching.
    #[must_use]
    pub fn cached_orders(&self) -> Option<&[Order]> {
        self.orders.as_deref()
    }

    /// Returns the first page of the site's products, fetching it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails.
    pub async fn products(&mut self) -> Result<&[Product], Error> {
        if self.products.is_none() {
            self.refresh_products().await?;
        }
        Ok(self.products.as_deref().unwrap_or_default())
    }

    /// Refetches the first page of products and replaces the cached value.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the fetch fails; the cache is left unchanged.
    pub async fn refresh_products(&mut self) -> Result<&[Product], Error> {
        let products = self.webflow.products(&self.id, 1).await?;
        Ok(self.products.insert(products).as_slice())
    }

    /// Returns the cached products without fetching.
    #[must_use]
    pub fn cached_products(&self) -> Option<&[Product]> {
        self.products.as_deref()
    }
}

fn parse_timezone(value: &str) -> Result<Tz, DecodingError> {
    value
        .parse::<Tz>()
        .map_err(|_| DecodingError::InvalidTimezone {
            value: value.to_string(),
        })
}
