//! CMS item endpoints.

use serde_json::{json, Value};

use crate::api::{live_query, segment, with_defaults, Fields, Webflow};
use crate::clients::HttpMethod;
use crate::entities::{self, Item};
use crate::error::Error;

impl Webflow {
    /// Lists one page of a collection's items.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list_items(&self, collection_id: &str, page: u32) -> Result<Value, Error> {
        let path = format!("/collections/{}/items", segment(collection_id));
        Ok(self.client.get(&path, self.page(page)).await?)
    }

    /// Lists one page of a collection's items, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or an item cannot be decoded.
    pub async fn items(&self, collection_id: &str, page: u32) -> Result<Vec<Item>, Error> {
        let value = self.list_items(collection_id, page).await?;
        let items = entities::list(&value, "Item", "items")?
            .iter()
            .map(Item::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(items)
    }

    /// Lists every item in a collection, requesting pages until the API
    /// reports no further records.
    ///
    /// Stops early on an empty page.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if any page request fails or an item cannot be
    /// decoded; items from earlier pages are discarded.
    pub async fn all_items(&self, collection_id: &str) -> Result<Vec<Item>, Error> {
        let mut all = Vec::new();
        let mut page = 1;
        loop {
            let items = self.items(collection_id, page).await?;
            let exhausted = items.is_empty() || !self.has_next_page();
            all.extend(items);
            if exhausted {
                break;
            }
            page += 1;
        }
        tracing::debug!(collection_id, count = all.len(), pages = page, "Listed all items");
        Ok(all)
    }

    /// Fetches one item.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get_item(&self, collection_id: &str, item_id: &str) -> Result<Value, Error> {
        Ok(self
            .client
            .get(&item_path(collection_id, item_id), Vec::new())
            .await?)
    }

    /// Fetches one item, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the item cannot be decoded.
    pub async fn item(&self, collection_id: &str, item_id: &str) -> Result<Item, Error> {
        let value = self.get_item(collection_id, item_id).await?;
        Ok(Item::from_value(entities::single(&value, "Item")?)?)
    }

    /// Creates an item. With `live`, the item is published immediately.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn create_item(
        &self,
        collection_id: &str,
        fields: Fields,
        live: bool,
    ) -> Result<Value, Error> {
        let path = format!("/collections/{}/items", segment(collection_id));
        self.write_item(HttpMethod::Post, &path, fields, live).await
    }

    /// Replaces an item's fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn update_item(
        &self,
        collection_id: &str,
        item_id: &str,
        fields: Fields,
        live: bool,
    ) -> Result<Value, Error> {
        let path = item_path(collection_id, item_id);
        self.write_item(HttpMethod::Put, &path, fields, live).await
    }

    /// Updates only the given item fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn patch_item(
        &self,
        collection_id: &str,
        item_id: &str,
        fields: Fields,
        live: bool,
    ) -> Result<Value, Error> {
        let path = item_path(collection_id, item_id);
        self.write_item(HttpMethod::Patch, &path, fields, live).await
    }

    /// Deletes an item. With `live`, it is also removed from the live site.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn delete_item(
        &self,
        collection_id: &str,
        item_id: &str,
        live: bool,
    ) -> Result<Value, Error> {
        tracing::info!(collection_id, item_id, live, "Deleting item");
        Ok(self
            .client
            .delete(&item_path(collection_id, item_id), live_query(live))
            .await?)
    }

    /// Publishes the given items.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn publish_items(
        &self,
        collection_id: &str,
        item_ids: &[&str],
    ) -> Result<Value, Error> {
        let path = format!("/collections/{}/items/publish", segment(collection_id));
        Ok(self
            .client
            .put(&path, json!({ "itemIds": item_ids }))
            .await?)
    }

    async fn write_item(
        &self,
        method: HttpMethod,
        path: &str,
        fields: Fields,
        live: bool,
    ) -> Result<Value, Error> {
        let body = json!({ "fields": with_defaults(fields) });
        Ok(self
            .client
            .send_with_body(method, path, body, live_query(live))
            .await?)
    }
}

fn item_path(collection_id: &str, item_id: &str) -> String {
    format!(
        "/collections/{}/items/{}",
        segment(collection_id),
        segment(item_id)
    )
}
