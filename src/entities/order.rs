//! E-commerce orders.

use serde_json::{Map, Value};

use crate::entities::{object, required_str};
use crate::error::DecodingError;

/// An e-commerce order.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    order_id: String,
    fields: Map<String, Value>,
}

impl Order {
    const ENTITY: &'static str = "Order";

    /// Hydrates an order from an orders response record.
    ///
    /// # Errors
    ///
    /// Returns [`DecodingError::MissingField`] if `orderId` is absent.
    pub fn from_value(value: &Value) -> Result<Self, DecodingError> {
        let map = object(value, Self::ENTITY)?;
        Ok(Self {
            order_id: required_str(map, Self::ENTITY, "orderId")?,
            fields: map.clone(),
        })
    }

    /// Returns the order id.
    #[must_use]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    /// Returns the full record as received.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}
