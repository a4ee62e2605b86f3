//! Site endpoints.

use serde_json::{json, Value};

use crate::api::{segment, Webflow};
use crate::entities::{self, Domain, Site};
use crate::error::Error;

impl Webflow {
    /// Lists the sites the token can access.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list_sites(&self) -> Result<Value, Error> {
        Ok(self.client.get("/sites", Vec::new()).await?)
    }

    /// Lists the sites the token can access, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or a site cannot be decoded.
    pub async fn sites(&self) -> Result<Vec<Site<'_>>, Error> {
        let value = self.list_sites().await?;
        let sites = entities::list(&value, "Site", "sites")?
            .iter()
            .map(|record| Site::from_value(self, record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(sites)
    }

    /// Fetches one site.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn get_site(&self, site_id: &str) -> Result<Value, Error> {
        let path = format!("/sites/{}", segment(site_id));
        Ok(self.client.get(&path, Vec::new()).await?)
    }

    /// Fetches one site, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the site cannot be decoded.
    pub async fn site(&self, site_id: &str) -> Result<Site<'_>, Error> {
        let value = self.get_site(site_id).await?;
        Ok(Site::from_value(self, &value)?)
    }

    /// Publishes a site to the given custom domains.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn publish_site(&self, site_id: &str, domains: &[&str]) -> Result<Value, Error> {
        let path = format!("/sites/{}/publish", segment(site_id));
        tracing::info!(site_id, domains = ?domains, "Publishing site");
        Ok(self
            .client
            .post(&path, json!({ "domains": domains }))
            .await?)
    }

    /// Lists a site's custom domains.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn list_domains(&self, site_id: &str) -> Result<Value, Error> {
        let path = format!("/sites/{}/domains", segment(site_id));
        Ok(self.client.get(&path, Vec::new()).await?)
    }

    /// Lists a site's custom domains, hydrated.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or a domain cannot be decoded.
    pub async fn domains(&self, site_id: &str) -> Result<Vec<Domain>, Error> {
        let value = self.list_domains(site_id).await?;
        let domains = entities::list(&value, "Domain", "domains")?
            .iter()
            .map(Domain::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(domains)
    }
}
