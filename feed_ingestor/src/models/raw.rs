use serde_json::{Map, Value};

use crate::errors::MappingError;

/// One untrusted element of a collection's `results` array.
///
/// Nothing is assumed about its shape until the mapper checks it field by field.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The record as an object, or a [`MappingError::NotAnObject`].
    pub fn as_object(&self) -> Result<&Map<String, Value>, MappingError> {
        self.0.as_object().ok_or(MappingError::NotAnObject {
            found: json_type(&self.0),
        })
    }

    /// Best-effort human identifier: the first non-blank string under one of
    /// `keys`, else the `id` field, else `None`.
    pub fn label(&self, keys: &[&str]) -> Option<String> {
        let obj = self.0.as_object()?;
        keys.iter()
            .filter_map(|k| obj.get(*k).and_then(Value::as_str))
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string)
            .or_else(|| match obj.get("id")? {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Name of a JSON value's type, for diagnostics.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
