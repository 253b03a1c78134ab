//! Small helpers shared by the sync crates: environment lookup and configuration errors.

pub mod config;
pub mod env;

pub use config::ConfigError;
