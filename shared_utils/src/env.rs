use std::path::Path;

use crate::config::ConfigError;

/// Looks `name` up in the process environment. Non-UTF-8 values read as absent.
///
/// The default lookup for [`get_var_with`].
pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Reads a required variable through `lookup`, returning a structured error
/// if it's missing. Blank values count as missing.
///
/// # Arguments
/// * `lookup` - Where values come from, usually [`process_env`].
/// * `name` - The name of the variable to read.
pub fn get_var_with<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    require(name, lookup(name))
}

fn require(name: &str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Loads variables from a dotenv file into the process environment.
///
/// With `path = None` a missing `./.env` is fine. An explicit path must exist.
pub fn load_dotenv(path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(p) => dotenvy::from_path(p)
            .map(|_| ())
            .map_err(|source| ConfigError::EnvFile {
                path: p.to_path_buf(),
                source,
            }),
        None => {
            dotenvy::dotenv().ok();
            Ok(())
        }
    }
}
