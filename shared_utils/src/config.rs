use std::path::PathBuf;

use thiserror::Error;

/// Errors related to application configuration.
///
/// All of these are fatal and are raised before any network or store activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable required by the application is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but its value cannot be used.
    #[error("Invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// An explicitly requested dotenv file could not be loaded.
    #[error("Failed to load env file {path}")]
    EnvFile {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying loader error.
        #[source]
        source: dotenvy::Error,
    },
}
