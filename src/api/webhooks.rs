//! Webhook endpoints.

use serde_json::{Map, Value};

use crate::api::{segment, Fields, Webflow};
use crate::entities::{self, Webhook};
use crate::error::Error;
use crate::validation::WEBHOOK_TRIGGER_TYPES;

impl Webflow {
    /// Lists a site's webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list_webhooks(&self, site_id: &str) -> Result<Value, Error> {
        let path = format!("/sites/{}/webhooks", segment(site_id));
        Ok(self.client.get(&path, Vec::new()).await?)
    }

    /// Lists a site's webhooks, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or a webhook cannot be decoded.
    pub async fn webhooks(&self, site_id: &str) -> Result<Vec<Webhook<'_>>, Error> {
        let value = self.list_webhooks(site_id).await?;
        let webhooks = entities::list(&value, "Webhook", "webhooks")?
            .iter()
            .map(|record| Webhook::from_value(self, record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(webhooks)
    }

    /// Fetches one webhook.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get_webhook(&self, site_id: &str, webhook_id: &str) -> Result<Value, Error> {
        let path = format!(
            "/sites/{}/webhooks/{}",
            segment(site_id),
            segment(webhook_id)
        );
        Ok(self.client.get(&path, Vec::new()).await?)
    }

    /// Fetches one webhook, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the webhook cannot be decoded.
    pub async fn webhook(&self, site_id: &str, webhook_id: &str) -> Result<Webhook<'_>, Error> {
        let value = self.get_webhook(site_id, webhook_id).await?;
        Ok(Webhook::from_value(self, &value)?)
    }

    /// Registers a webhook on a site.
    ///
    /// The body carries `triggerType` and `url`, plus `filter` when given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `trigger_type` is not a known trigger;
    /// no request is sent in that case. Otherwise returns [`Error`] if the
    /// request fails.
    pub async fn create_webhook(
        &self,
        site_id: &str,
        trigger_type: &str,
        url: &str,
        filter: Option<Fields>,
    ) -> Result<Value, Error> {
        WEBHOOK_TRIGGER_TYPES.check([trigger_type])?;

        let mut body = Map::new();
        body.insert("triggerType".to_string(), Value::from(trigger_type));
        body.insert("url".to_string(), Value::from(url));
        if let Some(filter) = filter {
            body.insert("filter".to_string(), Value::Object(filter));
        }

        let path = format!("/sites/{}/webhooks", segment(site_id));
        tracing::info!(site_id, trigger_type, "Creating webhook");
        Ok(self.client.post(&path, Value::Object(body)).await?)
    }

    /// Deletes a webhook.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn delete_webhook(&self, site_id: &str, webhook_id: &str) -> Result<Value, Error> {
        let path = format!(
            "/sites/{}/webhooks/{}",
            segment(site_id),
            segment(webhook_id)
        );
        tracing::info!(site_id, webhook_id, "Deleting webhook");
        Ok(self.client.delete(&path, Vec::new()).await?)
    }
}
