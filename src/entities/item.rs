//! CMS collection items.

use serde_json::{Map, Value};

use crate::entities::{object, required_bool, required_str};
use crate::error::DecodingError;

/// A CMS collection item.
///
/// Item schemas are defined per collection, so apart from the id and the
/// draft/archived flags every field stays in the raw [`fields`](Self::fields)
/// map.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    id: String,
    draft: bool,
    archived: bool,
    fields: Map<String, Value>,
}

impl Item {
    const ENTITY: &'static str = "Item";

    /// Hydrates an item from one record of an items response.
    ///
    /// # Errors
    ///
    /// Returns [`DecodingError`] if `_id`, `_draft` or `_archived` is missing.
    pub fn from_value(value: &Value) -> Result<Self, DecodingError> {
        let map = object(value, Self::ENTITY)?;
        Ok(Self {
            id: required_str(map, Self::ENTITY, "_id")?,
            draft: required_bool(map, Self::ENTITY, "_draft")?,
            archived: required_bool(map, Self::ENTITY, "_archived")?,
            fields: map.clone(),
        })
    }

    /// Returns the item id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns `true` if the item is a draft.
    #[must_use]
    pub const fn draft(&self) -> bool {
        self.draft
    }

    /// Returns `true` if the item is archived.
    #[must_use]
    pub const fn archived(&self) -> bool {
        self.archived
    }

    /// Returns the full record as received.
    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns a single field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_keeps_entire_record() {
        let value = json!({
            "_id": "item-1",
            "_draft": true,
            "_archived": false,
            "name": "Hello",
            "slug": "hello",
            "color": "#fff"
        });
        let item = Item::from_value(&value).unwrap();

        assert_eq!(item.id(), "item-1");
        assert!(item.draft());
        assert!(!item.archived());
        assert_eq!(item.field("color"), Some(&json!("#fff")));
        assert_eq!(item.fields().len(), 6);
    }

    #[test]
    fn test_item_requires_flags() {
        let err = Item::from_value(&json!({"_id": "x", "_draft": false})).unwrap_err();
        assert!(matches!(
            err,
            DecodingError::MissingField {
                entity: "Item",
                field: "_archived"
            }
        ));
    }
}
