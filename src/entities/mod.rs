//! Typed views over Webflow API responses.
//!
//! Every entity is built from a successful response by a pure `from_value`
//! constructor; no network I/O happens during hydration. Entities that can
//! fetch related data or change server state ([`Site`], [`Collection`],
//! [`Webhook`]) borrow the [`Webflow`](crate::Webflow) gateway that produced
//! them, so they can never outlive it.
//!
//! # Shapes
//!
//! List endpoints are accepted either as a bare JSON array or as an object
//! carrying the list under a resource key (such as `domains`) or `items`.
//! Single-item endpoints that answer `{"items": [item]}` are unwrapped to the
//! first element.
//!
//! # Timestamps
//!
//! Timestamps are RFC 3339 strings. A value that does not parse is a
//! [`DecodingError::InvalidTimestamp`]; it is never replaced by a default.

mod collection;
mod item;
mod order;
mod product;
mod site;
mod webhook;

pub use collection::Collection;
pub use item::Item;
pub use order::Order;
pub use product::Product;
pub use site::{Domain, Site};
pub use webhook::Webhook;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::DecodingError;

pub(crate) fn object<'v>(
    value: &'v Value,
    entity: &'static str,
) -> Result<&'v Map<String, Value>, DecodingError> {
    value.as_object().ok_or(DecodingError::UnexpectedShape {
        entity,
        expected: "a JSON object",
    })
}

/// Returns the records of a list response.
pub(crate) fn list<'v>(
    value: &'v Value,
    entity: &'static str,
    key: &'static str,
) -> Result<&'v [Value], DecodingError> {
    let records = match value {
        Value::Array(records) => Some(records),
        Value::Object(map) => map
            .get(key)
            .and_then(Value::as_array)
            .or_else(|| map.get("items").and_then(Value::as_array)),
        _ => None,
    };

    records
        .map(Vec::as_slice)
        .ok_or(DecodingError::UnexpectedShape {
            entity,
            expected: "a JSON array or an object holding one",
        })
}

/// Unwraps `{"items": [record]}` to `record`; any other value is returned as is.
pub(crate) fn single<'v>(
    value: &'v Value,
    entity: &'static str,
) -> Result<&'v Value, DecodingError> {
    match value.get("items") {
        Some(Value::Array(records)) => records.first().ok_or(DecodingError::UnexpectedShape {
            entity,
            expected: "a non-empty items array",
        }),
        _ => Ok(value),
    }
}

pub(crate) fn required_str(
    map: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<String, DecodingError> {
    map.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(DecodingError::MissingField { entity, field })
}

pub(crate) fn optional_str(map: &Map<String, Value>, field: &str) -> Option<String> {
    map.get(field).and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn required_bool(
    map: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<bool, DecodingError> {
    map.get(field)
        .and_then(Value::as_bool)
        .ok_or(DecodingError::MissingField { entity, field })
}

pub(crate) fn parse_timestamp(
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, DecodingError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|source| DecodingError::InvalidTimestamp {
            field,
            value: value.to_string(),
            source,
        })
}

pub(crate) fn required_timestamp(
    map: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<DateTime<Utc>, DecodingError> {
    let raw = required_str(map, entity, field)?;
    parse_timestamp(field, &raw)
}

/// A missing or `null` field is `None`; anything else must parse.
pub(crate) fn optional_timestamp(
    map: &Map<String, Value>,
    entity: &'static str,
    field: &'static str,
) -> Result<Option<DateTime<Utc>>, DecodingError> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(raw)) => parse_timestamp(field, raw).map(Some),
        Some(_) => Err(DecodingError::MissingField { entity, field }),
    }
}
