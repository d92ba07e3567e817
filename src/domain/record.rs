//! Record model shared by every resource kind.
//!
//! A [`Record`] is an identifier plus a map of field name to [`FieldValue`]. The
//! field set is not fixed by the type: employees, departments, and leaves all use
//! the same struct, and the per-kind column list lives in
//! [`crate::domain::schema`]. Imported rows may carry extra or missing fields and
//! are stored as-is.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// Store-assigned record identifier. Never user-editable.
pub type RecordId = u64;

/// Name of the identifier field in serialized rows.
pub const ID_FIELD: &str = "id";

/// Field values of a record without its identifier.
///
/// Used for candidates (rows proposed for insertion), update patches, and
/// dialog drafts.
pub type Fields = BTreeMap<String, FieldValue>;

/// A single scalar cell value.
///
/// Dates are stored as `Text` in ISO `YYYY-MM-DD` form. `Structured` holds
/// anything an import payload carried that is not a plain scalar (null,
/// arrays, nested objects); such values never satisfy a filter predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Structured(serde_json::Value),
}

impl FieldValue {
    /// Returns the value as text for predicate evaluation.
    ///
    /// Numbers and booleans are rendered in their JSON form. Returns `None`
    /// for structured values.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(s) => Some(Cow::Borrowed(s)),
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
            Self::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            Self::Structured(_) => None,
        }
    }

    /// Returns `true` if the value is an empty or whitespace-only string, or null.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.trim().is_empty(),
            Self::Structured(v) => v.is_null(),
            Self::Number(_) | Self::Bool(_) => false,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Structured(serde_json::Value::Null) => Ok(()),
            Self::Structured(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A stored row: unique identifier plus field values.
///
/// Serializes as a flat JSON object with an `id` key next to the fields.
///
/// # Examples
///
/// ```
/// use hrdesk::domain::{FieldValue, Record};
///
/// let mut record = Record::new(7);
/// record.set("name", "Emily Wilson");
/// assert_eq!(record.id, 7);
/// assert_eq!(record.text("name").as_deref(), Some("Emily Wilson"));
/// assert!(record.get("role").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    fields: Fields,
}

impl Record {
    /// Creates a record with no fields.
    #[must_use]
    pub fn new(id: RecordId) -> Self {
        Self {
            id,
            fields: Fields::new(),
        }
    }

    /// Creates a record from candidate fields, dropping any `id` key they carry.
    #[must_use]
    pub fn from_fields(id: RecordId, mut fields: Fields) -> Self {
        fields.remove(ID_FIELD);
        Self { id, fields }
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns a field as text, `None` if missing or structured.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.fields.get(name).and_then(FieldValue::as_text)
    }

    /// Sets a field. Setting `id` through here is ignored.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        if name == ID_FIELD {
            return;
        }
        self.fields.insert(name, value.into());
    }

    /// Merges `patch` over the current fields; the identifier is left untouched.
    pub fn merge(&mut self, patch: &Fields) {
        for (name, value) in patch {
            if name != ID_FIELD {
                self.fields.insert(name.clone(), value.clone());
            }
        }
    }

    /// Borrowed view of all fields.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Copies the fields out, e.g. to seed an edit draft.
    #[must_use]
    pub fn to_fields(&self) -> Fields {
        self.fields.clone()
    }
}

/// Builds a `Fields` map from string pairs.
///
/// Convenience for seeds and tests.
#[must_use]
pub fn text_fields(pairs: &[(&str, &str)]) -> Fields {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), FieldValue::from(*value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_identifier() {
        let mut record = Record::from_fields(3, text_fields(&[("status", "on leave")]));
        let mut patch = text_fields(&[("status", "active")]);
        patch.insert(ID_FIELD.into(), FieldValue::Number(99.into()));

        record.merge(&patch);

        assert_eq!(record.id, 3);
        assert_eq!(record.text("status").as_deref(), Some("active"));
        assert!(record.get(ID_FIELD).is_none());
    }

    #[test]
    fn from_fields_drops_embedded_id() {
        let mut fields = text_fields(&[("name", "X")]);
        fields.insert(ID_FIELD.into(), FieldValue::Number(5.into()));

        let record = Record::from_fields(11, fields);
        assert_eq!(record.id, 11);
        assert_eq!(record.fields().len(), 1);
    }

    #[test]
    fn serializes_flat_with_id() {
        let record = Record::from_fields(1, text_fields(&[("name", "Nursing")]));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Nursing"}));
    }

    #[test]
    fn field_values_deserialize_untagged() {
        let fields: Fields =
            serde_json::from_str(r#"{"a": "x", "b": 3, "c": true, "d": null, "e": [1]}"#).unwrap();
        assert_eq!(fields["a"], FieldValue::Text("x".into()));
        assert_eq!(fields["b"], FieldValue::Number(3.into()));
        assert_eq!(fields["c"], FieldValue::Bool(true));
        assert_eq!(fields["d"], FieldValue::Structured(serde_json::Value::Null));
        assert!(fields["e"].as_text().is_none());
    }

    #[test]
    fn blank_detection() {
        assert!(FieldValue::from("  ").is_blank());
        assert!(FieldValue::Structured(serde_json::Value::Null).is_blank());
        assert!(!FieldValue::from("x").is_blank());
        assert!(!FieldValue::Number(0.into()).is_blank());
    }
}
