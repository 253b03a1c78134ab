use thiserror::Error;

/// Failure to build the HTTP client backing a [`crate::sources::http::HttpSource`].
#[derive(Debug, Error)]
#[error("Failed to initialise HTTP client")]
pub struct SourceInitError(#[from] pub reqwest::Error);

/// Errors raised while fetching a collection. Any of these aborts the
/// collection's sync: there is nothing to process without a payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection refused, reset, body read).
    #[error("Network error while fetching {url}")]
    Network {
        /// URL that was requested.
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code.
    #[error("API request failed: {status} {reason}: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase, if the status has one.
        reason: &'static str,
        /// Response body, truncated for diagnostics.
        body: String,
    },

    /// The API answered 2xx but the body is not valid JSON.
    #[error("Response body is not valid JSON")]
    Decode(#[source] serde_json::Error),
}

/// The payload does not carry a list of records where one is expected.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// Top-level payload is not an object.
    #[error("expected a JSON object with a `results` array, got {found}: {preview}")]
    NotAnObject {
        /// JSON type actually received.
        found: &'static str,
        /// Truncated serialization of the payload.
        preview: String,
    },

    /// Object without a `results` member.
    #[error("payload has no `results` field: {preview}")]
    MissingResults {
        /// Truncated serialization of the payload.
        preview: String,
    },

    /// `results` exists but is not an array.
    #[error("`results` must be an array, got {found}: {preview}")]
    ResultsNotArray {
        /// JSON type actually received.
        found: &'static str,
        /// Truncated serialization of the `results` value.
        preview: String,
    },
}

/// A single record cannot be turned into entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// The record itself is not an object.
    #[error("record is not a JSON object (found {found})")]
    NotAnObject {
        /// JSON type actually received.
        found: &'static str,
    },

    /// A field required for identification or a foreign key is absent or null.
    #[error("missing required field `{field}`")]
    MissingField {
        /// Dotted path of the field, e.g. `rocket.configuration.id`.
        field: String,
    },

    /// A required field is present but has the wrong type.
    #[error("field `{field}` must be {expected}, found {found}")]
    InvalidField {
        /// Dotted path of the field.
        field: String,
        /// Expected JSON type.
        expected: &'static str,
        /// JSON type actually received.
        found: &'static str,
    },
}
