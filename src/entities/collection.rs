//! CMS collections.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::entities::{object, required_str, required_timestamp, Item};
use crate::error::{DecodingError, Error};
use crate::Webflow;

/// A CMS collection, able to fetch its own items.
///
/// # Example
///
/// ```rust,no_run
/// # async fn run(webflow: &webflow_api::Webflow) -> Result<(), webflow_api::Error> {
/// let collection = webflow.collection("580e63fc8c9a982ac9b8b745").await?;
/// for item in collection.items(1).await? {
///     println!("{} draft={}", item.id(), item.draft());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Collection<'a> {
    webflow: &'a Webflow,
    id: String,
    last_updated: DateTime<Utc>,
    created_on: DateTime<Utc>,
    name: String,
    slug: String,
    singular_name: String,
    raw: Map<String, Value>,
}

impl<'a> Collection<'a> {
    const ENTITY: &'static str = "Collection";

    /// Hydrates a collection from an API record.
    ///
    /// # Errors
    ///
    /// Returns [`DecodingError`] if a required field is missing or a
    /// timestamp does not parse.
    pub fn from_value(webflow: &'a Webflow, value: &Value) -> Result<Self, DecodingError> {
        let map = object(value, Self::ENTITY)?;
        Ok(Self {
            webflow,
            id: required_str(map, Self::ENTITY, "_id")?,
            last_updated: required_timestamp(map, Self::ENTITY, "lastUpdated")?,
            created_on: required_timestamp(map, Self::ENTITY, "createdOn")?,
            name: required_str(map, Self::ENTITY, "name")?,
            slug: required_str(map, Self::ENTITY, "slug")?,
            singular_name: required_str(map, Self::ENTITY, "singularName")?,
            raw: map.clone(),
        })
    }

    /// Returns the collection id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns when the collection was last updated.
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Returns when the collection was created.
    #[must_use]
    pub const fn created_on(&self) -> DateTime<Utc> {
        self.created_on
    }

    /// Returns the collection name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the collection slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Returns the singular name for one item in the collection.
    #[must_use]
    pub fn singular_name(&self) -> &str {
        &self.singular_name
    }

    /// Returns the full record as received, including the field schema.
    #[must_use]
    pub const fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    /// Fetches every item of this collection, page by page.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if a request fails or an item cannot be decoded.
    pub async fn all_items(&self) -> Result<Vec<Item>, Error> {
        self.webflow.all_items(&self.id).await
    }

    /// Fetches one page of this collection's items. See
    /// [`all_items`](Self::all_items) for the full listing.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or an item cannot be decoded.
    pub async fn items(&self, page: u32) -> Result<Vec<Item>, Error> {
        self.webflow.items(&self.id, page).await
    }

    /// Fetches a single item of this collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the item cannot be decoded.
    pub async fn item(&self, item_id: &str) -> Result<Item, Error> {
        self.webflow.item(&self.id, item_id).await
    }
}
