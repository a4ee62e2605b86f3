//! Product, SKU and inventory endpoints.

use serde_json::{json, Map, Value};

use crate::api::{segment, with_defaults, Fields, Webflow};
use crate::entities::{self, Product};
use crate::error::Error;
use crate::validation::INVENTORY_UPDATE_FIELDS;

impl Webflow {
    /// Lists one page of a site's products.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list_products(&self, site_id: &str, page: u32) -> Result<Value, Error> {
        let path = format!("/sites/{}/products", segment(site_id));
        Ok(self.client.get(&path, self.page(page)).await?)
    }

    /// Lists one page of a site's products, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or a product cannot be decoded.
    pub async fn products(&self, site_id: &str, page: u32) -> Result<Vec<Product>, Error> {
        let value = self.list_products(site_id, page).await?;
        let products = entities::list(&value, "Product", "products")?
            .iter()
            .map(Product::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    /// Fetches one product with its SKUs.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get_product(&self, site_id: &str, product_id: &str) -> Result<Value, Error> {
        Ok(self
            .client
            .get(&product_path(site_id, product_id), Vec::new())
            .await?)
    }

    /// Fetches one product, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the product cannot be decoded.
    pub async fn product(&self, site_id: &str, product_id: &str) -> Result<Product, Error> {
        let value = self.get_product(site_id, product_id).await?;
        Ok(Product::from_value(&value)?)
    }

    /// Creates a product and, optionally, its default SKU in one call.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn create_product_and_sku(
        &self,
        site_id: &str,
        product: Fields,
        sku: Option<Fields>,
    ) -> Result<Value, Error> {
        let mut body = Map::new();
        body.insert("product".to_string(), Value::Object(with_defaults(product)));
        if let Some(sku) = sku {
            body.insert("sku".to_string(), Value::Object(with_defaults(sku)));
        }

        let path = format!("/sites/{}/products", segment(site_id));
        Ok(self.client.post(&path, Value::Object(body)).await?)
    }

    /// Updates a product's fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn update_product(
        &self,
        site_id: &str,
        product_id: &str,
        fields: Fields,
    ) -> Result<Value, Error> {
        Ok(self
            .client
            .patch(
                &product_path(site_id, product_id),
                json!({ "fields": with_defaults(fields) }),
            )
            .await?)
    }

    /// Adds a SKU to a product.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn create_sku(
        &self,
        site_id: &str,
        product_id: &str,
        fields: Fields,
    ) -> Result<Value, Error> {
        let path = format!("{}/skus", product_path(site_id, product_id));
        Ok(self
            .client
            .post(&path, json!({ "skus": { "fields": with_defaults(fields) } }))
            .await?)
    }

    /// Updates a SKU's fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn update_sku(
        &self,
        site_id: &str,
        product_id: &str,
        sku_id: &str,
        fields: Fields,
    ) -> Result<Value, Error> {
        let path = format!(
            "{}/skus/{}",
            product_path(site_id, product_id),
            segment(sku_id)
        );
        Ok(self
            .client
            .patch(&path, json!({ "sku": { "fields": with_defaults(fields) } }))
            .await?)
    }

    /// Fetches the inventory of a SKU item.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get_inventory(&self, collection_id: &str, sku_id: &str) -> Result<Value, Error> {
        Ok(self
            .client
            .get(&inventory_path(collection_id, sku_id), Vec::new())
            .await?)
    }

    /// Updates the inventory of a SKU item.
    ///
    /// Only `quantity`, `updateQuantity` and `inventoryType` may be set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming every other key; no request is
    /// sent in that case. Otherwise returns [`Error`] if the request fails.
    pub async fn update_inventory(
        &self,
        collection_id: &str,
        sku_id: &str,
        fields: Fields,
    ) -> Result<Value, Error> {
        INVENTORY_UPDATE_FIELDS.check_keys(&fields)?;
        Ok(self
            .client
            .patch(
                &inventory_path(collection_id, sku_id),
                json!({ "fields": fields }),
            )
            .await?)
    }
}

fn product_path(site_id: &str, product_id: &str) -> String {
    format!(
        "/sites/{}/products/{}",
        segment(site_id),
        segment(product_id)
    )
}

fn inventory_path(collection_id: &str, sku_id: &str) -> String {
    format!(
        "/collections/{}/items/{}/inventory",
        segment(collection_id),
        segment(sku_id)
    )
}
