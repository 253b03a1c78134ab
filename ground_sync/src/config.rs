//! Run configuration resolved from the environment.

use feed_ingestor::{CollectionKind, Url};
use shared_utils::{
    ConfigError,
    env::{get_var_with, process_env},
};

use crate::sync::coordinator::SyncTarget;

/// Store connection string (SQLite path or `sqlite://` URL).
pub const DB_CONNECTION_STRING: &str = "DB_CONNECTION_STRING";
/// Upstream URL of the launches collection.
pub const LAUNCHES_LINK: &str = "LAUNCHES_LINK";
/// Upstream URL of the articles collection.
pub const ARTICLES_LINK: &str = "ARTICLES_LINK";

/// Everything a run needs before it touches the network or the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// `None` for dry runs, which never open the database.
    pub database_url: Option<String>,
    /// Collections to sync, in order.
    pub targets: Vec<SyncTarget>,
}

impl SyncConfig {
    /// Resolves configuration for `kinds` from the process environment.
    pub fn from_env(kinds: &[CollectionKind], needs_database: bool) -> Result<Self, ConfigError> {
        Self::from_lookup(process_env, kinds, needs_database)
    }

    /// Resolves configuration through `lookup`. Only the links of the
    /// requested collections are required.
    pub fn from_lookup<F>(
        lookup: F,
        kinds: &[CollectionKind],
        needs_database: bool,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = if needs_database {
            Some(get_var_with(&lookup, DB_CONNECTION_STRING)?)
        } else {
            None
        };

        let targets = kinds
            .iter()
            .map(|&kind| {
                let name = link_var(kind);
                let raw = get_var_with(&lookup, name)?;
                let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
                    name: name.to_string(),
                    reason: e.to_string(),
                })?;
                Ok(SyncTarget { kind, url })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self {
            database_url,
            targets,
        })
    }
}

/// Environment variable holding the URL of `kind`.
pub fn link_var(kind: CollectionKind) -> &'static str {
    match kind {
        CollectionKind::Launches => LAUNCHES_LINK,
        CollectionKind::Articles => ARTICLES_LINK,
    }
}
