//! Result collections and decoding of fetched payloads.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{DropdownError, Result};
use crate::item::{ItemId, ResultItem};

/// Ordered results handed over by the data-fetch layer.
///
/// `Empty` is the explicit "no results" marker. An empty `Items` sequence
/// renders identically, but the two stay distinguishable for callers that
/// care whether anything was fetched at all.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultCollection {
    /// No results.
    #[default]
    Empty,
    /// Results in fetch order.
    Items(Vec<ResultItem>),
}

impl ResultCollection {
    /// Returns `true` when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Items(items) => items.len(),
        }
    }

    /// Items in order. Yields nothing for `Empty`.
    pub fn iter(&self) -> std::slice::Iter<'_, ResultItem> {
        match self {
            Self::Empty => [].iter(),
            Self::Items(items) => items.iter(),
        }
    }

    /// Decodes a JSON payload that has already been fetched.
    ///
    /// `""` and `null` mean no results. An array must contain objects with an
    /// `id` (string, number or bool) and a string `name`; other fields are
    /// ignored. Any other shape is rejected, and a single bad item rejects
    /// the whole payload.
    ///
    /// # Example
    ///
    /// ```
    /// use dropdown::ResultCollection;
    /// use serde_json::json;
    ///
    /// let results = ResultCollection::from_json(&json!([{"id": 1, "name": "Alice"}])).unwrap();
    /// assert_eq!(results.len(), 1);
    ///
    /// assert_eq!(ResultCollection::from_json(&json!("")).unwrap(), ResultCollection::Empty);
    /// assert!(ResultCollection::from_json(&json!(7)).is_err());
    /// ```
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(Self::Empty),
            Value::String(s) if s.is_empty() => Ok(Self::Empty),
            Value::Array(entries) => {
                let items = entries
                    .iter()
                    .enumerate()
                    .map(|(index, entry)| decode_item(index, entry))
                    .collect::<Result<Vec<_>>>()?;
                log::trace!("ResultCollection::from_json decoded {} items", items.len());
                Ok(Self::Items(items))
            }
            Value::String(_) => Err(DropdownError::unsupported_shape("non-empty string")),
            other => Err(DropdownError::unsupported_shape(describe(other))),
        }
    }

    /// Parses JSON text and decodes it with [`from_json`](Self::from_json).
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }
}

fn decode_item(index: usize, entry: &Value) -> Result<ResultItem> {
    let Value::Object(fields) = entry else {
        return Err(DropdownError::invalid_item(
            index,
            format!("expected an object, found {}", describe(entry)),
        ));
    };

    let id = decode_id(index, fields)?;
    let name = match fields.get("name") {
        Some(Value::String(name)) => name.clone(),
        Some(other) => {
            return Err(DropdownError::invalid_item(
                index,
                format!("`name` must be a string, found {}", describe(other)),
            ));
        }
        None => return Err(DropdownError::invalid_item(index, "missing `name`")),
    };

    Ok(ResultItem { id, name })
}

fn decode_id(index: usize, fields: &Map<String, Value>) -> Result<ItemId> {
    match fields.get("id") {
        Some(value) => ItemId::from_json(value).ok_or_else(|| {
            DropdownError::invalid_item(
                index,
                format!("`id` must be a string, number or bool, found {}", describe(value)),
            )
        }),
        None => Err(DropdownError::invalid_item(index, "missing `id`")),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<Vec<ResultItem>> for ResultCollection {
    fn from(items: Vec<ResultItem>) -> Self {
        Self::Items(items)
    }
}

impl FromIterator<ResultItem> for ResultCollection {
    fn from_iter<I: IntoIterator<Item = ResultItem>>(iter: I) -> Self {
        Self::Items(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ResultCollection {
    type Item = &'a ResultItem;
    type IntoIter = std::slice::Iter<'a, ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ResultCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Empty => serializer.serialize_str(""),
            Self::Items(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ResultCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_markers() {
        assert_eq!(
            ResultCollection::from_json(&json!("")).unwrap(),
            ResultCollection::Empty
        );
        assert_eq!(
            ResultCollection::from_json(&Value::Null).unwrap(),
            ResultCollection::Empty
        );
        assert_eq!(
            ResultCollection::from_json(&json!([])).unwrap(),
            ResultCollection::Items(vec![])
        );
    }

    #[test]
    fn test_items_keep_order() {
        let results = ResultCollection::from_json(&json!([
            {"id": 2, "name": "Bob"},
            {"id": 1, "name": "Alice"}
        ]))
        .unwrap();
        let names: Vec<_> = results.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Bob", "Alice"]);
    }

    #[test]
    fn test_id_kinds() {
        let results = ResultCollection::from_json(&json!([
            {"id": "abc", "name": "a"},
            {"id": 1.5, "name": "b"},
            {"id": false, "name": "c"},
            {"id": 18446744073709551615u64, "name": "d"}
        ]))
        .unwrap();
        let ids: Vec<_> = results.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(ids, ["abc", "1.5", "false", "18446744073709551615"]);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let results =
            ResultCollection::from_json(&json!([{"id": 1, "name": "x", "extra": [1, 2]}]))
                .unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_unsupported_shapes() {
        for value in [json!("text"), json!(3), json!(true), json!({"id": 1, "name": "x"})] {
            let err = ResultCollection::from_json(&value).unwrap_err();
            assert!(matches!(err, DropdownError::UnsupportedShape { .. }));
        }
    }

    #[test]
    fn test_bad_item_names_its_index() {
        let err = ResultCollection::from_json(&json!([
            {"id": 1, "name": "ok"},
            {"id": 2}
        ]))
        .unwrap_err();
        match err {
            DropdownError::InvalidItem { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_null_id_rejected() {
        let err = ResultCollection::from_json(&json!([{"id": null, "name": "x"}])).unwrap_err();
        assert!(matches!(err, DropdownError::InvalidItem { index: 0, .. }));
    }

    #[test]
    fn test_string_item_reported_as_string() {
        let err = ResultCollection::from_json(&json!([""])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: result item 0: expected an object, found string"
        );

        let err = ResultCollection::from_json(&json!("text")).unwrap_err();
        assert!(err.to_string().contains("non-empty string"));
    }

    #[test]
    fn test_decoders_agree_on_ids() {
        let text = r#"[
            {"id": 18446744073709551615, "name": "big"},
            {"id": -3, "name": "neg"},
            {"id": 0.5, "name": "half"},
            {"id": "IGHJ4", "name": "text"}
        ]"#;
        let decoded = ResultCollection::from_json_str(text).unwrap();
        let derived: Vec<ResultItem> = serde_json::from_str(text).unwrap();
        assert_eq!(decoded, ResultCollection::Items(derived));
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = ResultCollection::from_json_str("[{").unwrap_err();
        assert!(matches!(err, DropdownError::Json(_)));
    }

    #[test]
    fn test_serde_round_trip_shapes() {
        let empty: ResultCollection = serde_json::from_str("\"\"").unwrap();
        assert_eq!(empty, ResultCollection::Empty);
        assert_eq!(serde_json::to_string(&empty).unwrap(), "\"\"");

        let items: ResultCollection =
            serde_json::from_str(r#"[{"id":1,"name":"Alice"}]"#).unwrap();
        assert_eq!(
            serde_json::to_string(&items).unwrap(),
            r#"[{"id":1,"name":"Alice"}]"#
        );

        assert!(serde_json::from_str::<ResultCollection>("42").is_err());
    }
}
