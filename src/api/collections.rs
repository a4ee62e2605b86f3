//! Collection endpoints.

use serde_json::Value;

use crate::api::{segment, Webflow};
use crate::entities::{self, Collection};
use crate::error::Error;

impl Webflow {
    /// Lists a site's CMS collections.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list_collections(&self, site_id: &str) -> Result<Value, Error> {
        let path = format!("/sites/{}/collections", segment(site_id));
        Ok(self.client.get(&path, Vec::new()).await?)
    }

    /// Lists a site's CMS collections, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or a collection cannot be decoded.
    pub async fn collections(&self, site_id: &str) -> Result<Vec<Collection<'_>>, Error> {
        let value = self.list_collections(site_id).await?;
        let collections = entities::list(&value, "Collection", "collections")?
            .iter()
            .map(|record| Collection::from_value(self, record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(collections)
    }

    /// Fetches one collection, including its field schema.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get_collection(&self, collection_id: &str) -> Result<Value, Error> {
        let path = format!("/collections/{}", segment(collection_id));
        Ok(self.client.get(&path, Vec::new()).await?)
    }

    /// Fetches one collection, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the collection cannot be decoded.
    pub async fn collection(&self, collection_id: &str) -> Result<Collection<'_>, Error> {
        let value = self.get_collection(collection_id).await?;
        Ok(Collection::from_value(self, &value)?)
    }
}
