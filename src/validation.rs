//! Fixed allow-lists checked before a request is sent.
//!
//! Webflow rejects unknown webhook triggers and unknown order or inventory
//! update fields. The SDK checks them locally so a bad call fails with a
//! [`ValidationError`] naming every offending token, and no request is made.
//!
//! # Example
//!
//! ```rust
//! use webflow_api::validation::ORDER_UPDATE_FIELDS;
//!
//! assert!(ORDER_UPDATE_FIELDS.check(["comment", "shippingTracking"]).is_ok());
//!
//! let err = ORDER_UPDATE_FIELDS.check(["comment", "status"]).unwrap_err();
//! assert!(err.to_string().contains("status"));
//! ```

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// A named, immutable set of accepted tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllowList {
    name: &'static str,
    allowed: &'static [&'static str],
}

impl AllowList {
    /// Creates an allow-list.
    #[must_use]
    pub const fn new(name: &'static str, allowed: &'static [&'static str]) -> Self {
        Self { name, allowed }
    }

    /// Returns the rule name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the accepted tokens.
    #[must_use]
    pub const fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }

    /// Returns `true` if `token` is accepted.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.allowed.contains(&token)
    }

    /// Checks every token, collecting all rejected ones in input order.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAllowed`] if any token is not accepted.
    pub fn check<I, S>(&self, tokens: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let invalid: Vec<String> = tokens
            .into_iter()
            .filter(|t| !self.contains(t.as_ref()))
            .map(|t| t.as_ref().to_string())
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::NotAllowed {
                rule: self.name,
                invalid,
                allowed: self.allowed.to_vec(),
            })
        }
    }

    /// Checks the keys of a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NotAllowed`] if any key is not accepted.
    pub fn check_keys(&self, fields: &Map<String, Value>) -> Result<(), ValidationError> {
        self.check(fields.keys())
    }
}

/// Events a webhook can subscribe to.
pub const WEBHOOK_TRIGGER_TYPES: AllowList = AllowList::new(
    "webhook trigger type",
    &[
        "form_submission",
        "site_publish",
        "ecomm_new_order",
        "ecomm_order_changed",
        "ecomm_inventory_changed",
        "memberships_user_account_added",
        "memberships_user_account_updated",
        "memberships_user_account_deleted",
        "collection_item_created",
        "collection_item_changed",
        "collection_item_deleted",
        "collection_item_unpublished",
    ],
);

/// Fields accepted by an order update.
pub const ORDER_UPDATE_FIELDS: AllowList = AllowList::new(
    "order update field",
    &[
        "comment",
        "shippingProvider",
        "shippingTracking",
        "shippingTrackingURL",
    ],
);

/// Fields accepted by an inventory update.
pub const INVENTORY_UPDATE_FIELDS: AllowList = AllowList::new(
    "inventory update field",
    &["quantity", "updateQuantity", "inventoryType"],
);
