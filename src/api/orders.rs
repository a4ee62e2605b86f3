//! Order and e-commerce settings endpoints.

use serde_json::{json, Value};

use crate::api::{segment, Fields, Webflow};
use crate::entities::{self, Order};
use crate::error::Error;
use crate::validation::ORDER_UPDATE_FIELDS;

impl Webflow {
    /// Lists one page of a site's orders.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list_orders(&self, site_id: &str, page: u32) -> Result<Value, Error> {
        let path = format!("/sites/{}/orders", segment(site_id));
        Ok(self.client.get(&path, self.page(page)).await?)
    }

    /// Lists one page of a site's orders, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or an order cannot be decoded.
    pub async fn orders(&self, site_id: &str, page: u32) -> Result<Vec<Order>, Error> {
        let value = self.list_orders(site_id, page).await?;
        let orders = entities::list(&value, "Order", "orders")?
            .iter()
            .map(Order::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(orders)
    }

    /// Fetches one order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get_order(&self, site_id: &str, order_id: &str) -> Result<Value, Error> {
        Ok(self
            .client
            .get(&order_path(site_id, order_id), Vec::new())
            .await?)
    }

    /// Fetches one order, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the order cannot be decoded.
    pub async fn order(&self, site_id: &str, order_id: &str) -> Result<Order, Error> {
        let value = self.get_order(site_id, order_id).await?;
        Ok(Order::from_value(&value)?)
    }

    /// Updates an order.
    ///
    /// Only `comment`, `shippingProvider`, `shippingTracking` and
    /// `shippingTrackingURL` may be set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming every other key; no request is
    /// sent in that case. Otherwise returns [`Error`] if the request fails.
    pub async fn update_order(
        &self,
        site_id: &str,
        order_id: &str,
        fields: Fields,
    ) -> Result<Value, Error> {
        ORDER_UPDATE_FIELDS.check_keys(&fields)?;
        Ok(self
            .client
            .patch(&order_path(site_id, order_id), json!({ "fields": fields }))
            .await?)
    }

    /// Marks an order fulfilled, optionally emailing the customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn fulfill_order(
        &self,
        site_id: &str,
        order_id: &str,
        send_email: bool,
    ) -> Result<Value, Error> {
        let path = format!("{}/fulfill", order_path(site_id, order_id));
        Ok(self
            .client
            .post(&path, json!({ "sendOrderFulfilledEmail": send_email }))
            .await?)
    }

    /// Marks a fulfilled order unfulfilled.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn unfulfill_order(&self, site_id: &str, order_id: &str) -> Result<Value, Error> {
        let path = format!("{}/unfulfill", order_path(site_id, order_id));
        Ok(self.client.post(&path, json!({})).await?)
    }

    /// Refunds an order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn refund_order(&self, site_id: &str, order_id: &str) -> Result<Value, Error> {
        let path = format!("{}/refund", order_path(site_id, order_id));
        tracing::info!(site_id, order_id, "Refunding order");
        Ok(self.client.post(&path, json!({})).await?)
    }

    /// Fetches a site's e-commerce settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn ecommerce_settings(&self, site_id: &str) -> Result<Value, Error> {
        let path = format!("/sites/{}/ecommerce/settings", segment(site_id));
        Ok(self.client.get(&path, Vec::new()).await?)
    }
}

fn order_path(site_id: &str, order_id: &str) -> String {
    format!("/sites/{}/orders/{}", segment(site_id), segment(order_id))
}
