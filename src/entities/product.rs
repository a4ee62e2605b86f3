//! E-commerce products and their SKUs.

use serde_json::{Map, Value};

use crate::entities::object;
use crate::error::DecodingError;

/// An e-commerce product.
///
/// Product list and fetch responses wrap the product and its SKUs as
/// `{"product": {...}, "skus": [...]}`; both the wrapped and the bare form
/// are accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    id: Option<String>,
    fields: Map<String, Value>,
}

impl Product {
    const ENTITY: &'static str = "Product";

    /// Hydrates a product.
    ///
    /// # Errors
    ///
    /// Returns [`DecodingError::UnexpectedShape`] if `value` is not an object.
    pub fn from_value(value: &Value) -> Result<Self, DecodingError> {
        let map = object(value, Self::ENTITY)?;
        let id = map
            .get("product")
            .and_then(|product| product.get("_id"))
            .or_else(|| map.get("_id"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            id,
            fields: map.clone(),
        })
    }

    /// Returns the product id, if the record carries one.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the full record as received.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns the nested SKU records, or an empty slice if there are none.
    #[must_use]
    pub fn skus(&self) -> &[Value] {
        self.fields
            .get("skus")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
