//! Site webhooks.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::api::Fields;
use crate::entities::{object, optional_str, optional_timestamp, required_str};
use crate::error::{DecodingError, Error, ValidationError};
use crate::Webflow;

/// A webhook registered on a site, or a local draft not yet registered.
///
/// State changes happen only through [`create`](Self::create),
/// [`save`](Self::save) and [`delete`](Self::delete). After `create` or
/// `save`, every field is replaced by the server's representation.
///
/// # Example
///
/// ```rust,no_run
/// # async fn run(webflow: &webflow_api::Webflow) -> Result<(), webflow_api::Error> {
/// use webflow_api::Webhook;
///
/// let mut hook = Webhook::draft(webflow, "site-id", "form_submission", "https://example.com/hook", None);
/// assert!(hook.id().is_none());
///
/// hook.save().await?;
/// println!("registered {}", hook.id().unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Webhook<'a> {
    webflow: &'a Webflow,
    id: Option<String>,
    trigger_type: String,
    trigger_id: Option<String>,
    site: String,
    url: String,
    created_on: Option<DateTime<Utc>>,
    last_used: Option<DateTime<Utc>>,
    filter: Option<Map<String, Value>>,
}

impl<'a> Webhook<'a> {
    const ENTITY: &'static str = "Webhook";

    /// Hydrates a webhook from an API record.
    ///
    /// # Errors
    ///
    /// Returns [`DecodingError`] if `_id`, `triggerType`, `site` or `url` is
    /// missing, or a timestamp does not parse.
    pub fn from_value(webflow: &'a Webflow, value: &Value) -> Result<Self, DecodingError> {
        let map = object(value, Self::ENTITY)?;
        let last_used = match optional_timestamp(map, Self::ENTITY, "lastUsed")? {
            Some(ts) => Some(ts),
            None => optional_timestamp(map, Self::ENTITY, "lastUsedOn")?,
        };

        Ok(Self {
            webflow,
            id: Some(required_str(map, Self::ENTITY, "_id")?),
            trigger_type: required_str(map, Self::ENTITY, "triggerType")?,
            trigger_id: optional_str(map, "triggerId"),
            site: required_str(map, Self::ENTITY, "site")?,
            url: required_str(map, Self::ENTITY, "url")?,
            created_on: optional_timestamp(map, Self::ENTITY, "createdOn")?,
            last_used,
            filter: map.get("filter").and_then(Value::as_object).cloned(),
        })
    }

    /// Creates a local draft with no id. Nothing is sent until
    /// [`save`](Self::save) is called.
    #[must_use]
    pub fn draft(
        webflow: &'a Webflow,
        site: impl Into<String>,
        trigger_type: impl Into<String>,
        url: impl Into<String>,
        filter: Option<Fields>,
    ) -> Self {
        Self {
            webflow,
            id: None,
            trigger_type: trigger_type.into(),
            trigger_id: None,
            site: site.into(),
            url: url.into(),
            created_on: None,
            last_used: None,
            filter,
        }
    }

    /// Returns the webhook id, or `None` for an unsaved draft.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the trigger type, e.g. `form_submission`.
    #[must_use]
    pub fn trigger_type(&self) -> &str {
        &self.trigger_type
    }

    /// Returns the id of the object that triggers the webhook, if reported.
    #[must_use]
    pub fn trigger_id(&self) -> Option<&str> {
        self.trigger_id.as_deref()
    }

    /// Returns the site id.
    #[must_use]
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the destination URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns when the webhook was created.
    #[must_use]
    pub const fn created_on(&self) -> Option<DateTime<Utc>> {
        self.created_on
    }

    /// Returns when the webhook last fired.
    #[must_use]
    pub const fn last_used(&self) -> Option<DateTime<Utc>> {
        self.last_used
    }

    /// Returns the event filter.
    #[must_use]
    pub const fn filter(&self) -> Option<&Map<String, Value>> {
        self.filter.as_ref()
    }

    /// Registers a new webhook on this webhook's site and replaces every
    /// local field with the server's response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an unknown trigger type (no request
    /// is sent), or any request or decoding error.
    pub async fn create(
        &mut self,
        trigger_type: &str,
        url: &str,
        filter: Option<Fields>,
    ) -> Result<&mut Self, Error> {
        let created = self
            .webflow
            .create_webhook(&self.site, trigger_type, url, filter)
            .await?;
        *self = Self::from_value(self.webflow, &created)?;
        Ok(self)
    }

    /// Registers this webhook's trigger, URL and filter, then replaces every
    /// local field with the server's response.
    ///
    /// # Errors
    ///
    /// See [`create`](Self::create).
    pub async fn save(&mut self) -> Result<&mut Self, Error> {
        let trigger_type = self.trigger_type.clone();
        let url = self.url.clone();
        let filter = self.filter.clone();
        self.create(&trigger_type, &url, filter).await
    }

    /// Deletes this webhook on the server.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingId`] for an unsaved draft, or any
    /// request error.
    pub async fn delete(&self) -> Result<Value, Error> {
        let id = self
            .id
            .as_deref()
            .ok_or(ValidationError::MissingId {
                entity: Self::ENTITY,
            })?;
        self.webflow.delete_webhook(&self.site, id).await
    }
}
