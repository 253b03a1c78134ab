//! Collection shape check.
//!
//! Only the envelope is validated here. Individual records are checked lazily
//! by the mappers so one malformed record never hides its siblings.

use serde_json::Value;

use crate::{
    errors::ShapeError,
    models::raw::{RawRecord, json_type},
    text::truncate_chars,
};

/// Key under which the API publishes a page of records.
pub const RESULTS_KEY: &str = "results";

const PREVIEW_CHARS: usize = 256;

/// Pulls the `results` array out of a decoded collection payload.
pub fn extract_results(payload: Value) -> Result<Vec<RawRecord>, ShapeError> {
    let Value::Object(mut obj) = payload else {
        return Err(ShapeError::NotAnObject {
            found: json_type(&payload),
            preview: preview(&payload),
        });
    };

    match obj.remove(RESULTS_KEY) {
        Some(Value::Array(items)) => Ok(items.into_iter().map(RawRecord::new).collect()),
        Some(other) => Err(ShapeError::ResultsNotArray {
            found: json_type(&other),
            preview: preview(&other),
        }),
        None => Err(ShapeError::MissingResults {
            preview: preview(&Value::Object(obj)),
        }),
    }
}

fn preview(value: &Value) -> String {
    truncate_chars(&value.to_string(), PREVIEW_CHARS)
}
