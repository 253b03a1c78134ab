//! Record → entity mapping.
//!
//! Mappers are pure and all-or-nothing: either the whole entity set for a
//! record comes back or a [`MappingError`] naming the offending field.
//! Required fields are the ones needed to identify an entity or resolve a
//! foreign key; every other scalar is optional and degrades to `None`.

pub mod article;
pub mod launch;

use serde_json::{Map, Value};

use crate::{errors::MappingError, models::raw::json_type};

/// A JSON object plus the dotted path it was reached by, so errors can name
/// `rocket.configuration.id` rather than just `id`.
pub(crate) struct Fields<'a> {
    path: String,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn root(map: &'a Map<String, Value>) -> Self {
        Self {
            path: String::new(),
            map,
        }
    }

    fn path_of(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    /// A present, non-null value.
    fn present(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    fn required(&self, key: &str) -> Result<&'a Value, MappingError> {
        self.present(key).ok_or_else(|| MappingError::MissingField {
            field: self.path_of(key),
        })
    }

    fn invalid(&self, key: &str, expected: &'static str, found: &Value) -> MappingError {
        MappingError::InvalidField {
            field: self.path_of(key),
            expected,
            found: json_type(found),
        }
    }

    /// Nested object that must exist.
    pub(crate) fn object(&self, key: &str) -> Result<Fields<'a>, MappingError> {
        let value = self.required(key)?;
        let map = value
            .as_object()
            .ok_or_else(|| self.invalid(key, "an object", value))?;
        Ok(Fields {
            path: self.path_of(key),
            map,
        })
    }

    /// Nested object that may be absent or null.
    pub(crate) fn optional_object(&self, key: &str) -> Result<Option<Fields<'a>>, MappingError> {
        match self.present(key) {
            None => Ok(None),
            Some(_) => self.object(key).map(Some),
        }
    }

    pub(crate) fn required_i64(&self, key: &str) -> Result<i64, MappingError> {
        let value = self.required(key)?;
        value
            .as_i64()
            .ok_or_else(|| self.invalid(key, "an integer", value))
    }

    pub(crate) fn required_str(&self, key: &str) -> Result<String, MappingError> {
        let value = self.required(key)?;
        match value.as_str() {
            Some(s) if !s.trim().is_empty() => Ok(s.to_string()),
            Some(_) => Err(MappingError::MissingField {
                field: self.path_of(key),
            }),
            None => Err(self.invalid(key, "a string", value)),
        }
    }

    /// Optional string; wrong types degrade to `None`.
    pub(crate) fn opt_str(&self, key: &str) -> Option<String> {
        self.present(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    pub(crate) fn bool_or(&self, key: &str, default: bool) -> bool {
        self.present(key).and_then(Value::as_bool).unwrap_or(default)
    }

    /// Array contents, or empty when absent or not an array.
    pub(crate) fn list(&self, key: &str) -> Vec<Value> {
        self.present(key)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }

    pub(crate) fn raw(&self, key: &str) -> Option<&'a Value> {
        self.present(key)
    }
}
