//! Bulk import decoder.
//!
//! Parses pasted text into candidate records. The payload is a JSON array of
//! objects; each object's keys become field names. Decoding is all-or-nothing:
//! either the whole text yields a candidate list or nothing is produced and the
//! store is never touched.
//!
//! Elements are accepted as-is, without per-field schema validation. An
//! element that is not an object becomes an empty candidate, and an `id` key
//! is dropped since the store assigns identifiers.

use crate::domain::error::{HrdeskError, Result};
use crate::domain::record::{FieldValue, Fields, ID_FIELD};
use serde_json::Value;

/// Decodes import text into candidate field maps.
///
/// # Errors
///
/// - [`HrdeskError::MalformedPayload`] if `text` is not valid JSON
/// - [`HrdeskError::InvalidShape`] if the top-level value is not an array
///
/// # Examples
///
/// ```
/// use hrdesk::storage::import::decode;
///
/// let candidates = decode(r#"[{"name": "X", "id": 4}]"#)?;
/// assert_eq!(candidates.len(), 1);
/// assert!(candidates[0].get("id").is_none());
/// # Ok::<(), hrdesk::HrdeskError>(())
/// ```
pub fn decode(text: &str) -> Result<Vec<Fields>> {
    let _span = tracing::debug_span!("decode_import", payload_len = text.len()).entered();

    let value: Value = serde_json::from_str(text).map_err(|e| {
        tracing::debug!(error = %e, "import payload is not valid JSON");
        HrdeskError::MalformedPayload(e)
    })?;

    let Value::Array(elements) = value else {
        let found = json_type(&value);
        tracing::debug!(found, "import payload is not an array");
        return Err(HrdeskError::InvalidShape(found));
    };

    let candidates: Vec<Fields> = elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| candidate(index, element))
        .collect();

    tracing::debug!(candidate_count = candidates.len(), "import payload decoded");
    Ok(candidates)
}

fn candidate(index: usize, element: Value) -> Fields {
    match element {
        Value::Object(object) => object
            .into_iter()
            .filter(|(key, _)| key != ID_FIELD)
            .map(|(key, value)| (key, field_value(value)))
            .collect(),
        other => {
            tracing::warn!(index, found = json_type(&other), "import element is not an object, keeping it empty");
            Fields::new()
        }
    }
}

fn field_value(value: Value) -> FieldValue {
    match value {
        Value::String(s) => FieldValue::Text(s),
        Value::Number(n) => FieldValue::Number(n),
        Value::Bool(b) => FieldValue::Bool(b),
        other => FieldValue::Structured(other),
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
