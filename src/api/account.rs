//! Token and user endpoints.

use serde_json::Value;

use crate::api::Webflow;
use crate::error::Error;

impl Webflow {
    /// Fetches the user who authorized the token.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn current_user(&self) -> Result<Value, Error> {
        Ok(self.client.get("/user", Vec::new()).await?)
    }

    /// Fetches the token's authorization details: granted sites,
    /// workspaces and application.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn auth_info(&self) -> Result<Value, Error> {
        Ok(self.client.get("/info", Vec::new()).await?)
    }
}
