//! Document store seam.
//!
//! The sync logic only needs a keyed create-or-replace, so that is all
//! [`DocumentStore`] offers. [`sqlite::SqliteStore`] persists to one table per
//! entity kind; [`memory::MemoryStore`] keeps JSON documents in a map for
//! dry runs and tests.

pub mod memory;
pub mod sqlite;

use feed_ingestor::{Entity, EntityId, EntityKind};
use thiserror::Error;

/// Errors raised by a [`DocumentStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open database {url}")]
    Connect {
        url: String,
        #[source]
        source: diesel::ConnectionError,
    },

    #[error("Failed to configure database connection")]
    Setup(#[source] diesel::result::Error),

    #[error("Failed to run migrations")]
    Migration(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A single upsert failed.
    #[error("Failed to upsert {kind} {id}")]
    Query {
        kind: EntityKind,
        id: EntityId,
        #[source]
        source: diesel::result::Error,
    },

    /// An entity could not be serialized into its stored form.
    #[error("Failed to encode {kind} {id}")]
    Encode {
        kind: EntityKind,
        id: EntityId,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to close database")]
    Disconnect(#[source] diesel::result::Error),
}

/// Keyed create-or-replace storage, addressed by entity kind + identifier.
pub trait DocumentStore {
    /// Replaces the full field set stored for `entity`'s identifier, or
    /// inserts it. Never merges with what was there before.
    fn upsert(&mut self, entity: &Entity) -> Result<(), StoreError>;

    /// Releases the store. Called once at the end of a run on every path.
    fn disconnect(self) -> Result<(), StoreError>
    where
        Self: Sized;
}
