//! Per-collection synchronization.
//!
//! ## What this does
//! [`sync_collection`] takes one collection through
//! `Fetching → Validating → Processing → Summarizing`:
//! - a fetch or shape error fails the whole collection (there is nothing to
//!   process without a payload);
//! - records are processed one at a time, in source order; a record that
//!   fails to map or to store is recorded as a [`RecordFailure`] and the loop
//!   moves on to its sibling;
//! - if a non-empty collection ends with nothing synced, the collection fails
//!   with [`CollectionError::TotalFailure`].
//!
//! Record-level problems ([`RecordError`]) never escape this module; callers
//! only ever see a [`CollectionSummary`] or a [`CollectionError`].

pub mod coordinator;

use std::fmt;

use feed_ingestor::{
    CollectionKind, FetchError, MappingError, RawRecord, ShapeError, Url,
    sources::CollectionSource, validate::extract_results,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    report::error_chain,
    store::{DocumentStore, StoreError},
};

/// Where a collection sync is (or was when it stopped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Fetching,
    Validating,
    Processing,
    Summarizing,
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SyncPhase::Fetching => "fetching",
            SyncPhase::Validating => "validating",
            SyncPhase::Processing => "processing",
            SyncPhase::Summarizing => "summarizing",
        })
    }
}

/// Why a single record was skipped.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Mapping(#[from] MappingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One skipped record.
#[derive(Debug)]
pub struct RecordFailure {
    /// 0-based position in the source `results` array.
    pub index: usize,
    /// Title, name or id of the record, for humans.
    pub label: String,
    pub error: RecordError,
}

/// A collection that reached `Completed`, possibly with skipped records.
#[derive(Debug)]
pub struct CollectionSummary {
    pub kind: CollectionKind,
    /// Records in the fetched page.
    pub total: usize,
    /// Records whose every entity was written.
    pub synced: usize,
    pub failures: Vec<RecordFailure>,
}

/// A collection that ended in `Failed`.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Failed to fetch {kind}")]
    Fetch {
        kind: CollectionKind,
        #[source]
        source: FetchError,
    },

    #[error("Unexpected {kind} payload")]
    Shape {
        kind: CollectionKind,
        #[source]
        source: ShapeError,
    },

    #[error("All {total} {kind} records failed to sync")]
    TotalFailure {
        kind: CollectionKind,
        total: usize,
        failures: Vec<RecordFailure>,
    },
}

impl CollectionError {
    /// Phase in which the collection stopped.
    pub fn phase(&self) -> SyncPhase {
        match self {
            CollectionError::Fetch { .. } => SyncPhase::Fetching,
            CollectionError::Shape { .. } => SyncPhase::Validating,
            CollectionError::TotalFailure { .. } => SyncPhase::Summarizing,
        }
    }

    /// Record failures behind a total failure; empty otherwise.
    pub fn failures(&self) -> &[RecordFailure] {
        match self {
            CollectionError::TotalFailure { failures, .. } => failures,
            _ => &[],
        }
    }
}

/// Syncs one collection from `url` into `store`, fetching through `feed`.
pub async fn sync_collection<C, S>(
    feed: &C,
    store: &mut S,
    kind: CollectionKind,
    url: &Url,
) -> Result<CollectionSummary, CollectionError>
where
    C: CollectionSource + ?Sized,
    S: DocumentStore + ?Sized,
{
    info!(collection = %kind, phase = %SyncPhase::Fetching, %url, "[{kind}] fetching");
    let payload = feed
        .fetch(url)
        .await
        .map_err(|source| CollectionError::Fetch { kind, source })?;

    info!(collection = %kind, phase = %SyncPhase::Validating, "[{kind}] validating payload");
    let records =
        extract_results(payload).map_err(|source| CollectionError::Shape { kind, source })?;

    let total = records.len();
    info!(collection = %kind, phase = %SyncPhase::Processing, total, "[{kind}] processing {total} records");

    let mut synced = 0;
    let mut failures = Vec::new();
    for (index, record) in records.iter().enumerate() {
        match sync_record(store, kind, record) {
            Ok(written) => {
                synced += 1;
                tracing::debug!(collection = %kind, index, written, "record synced");
            }
            Err(error) => {
                let label = kind.record_label(record, index);
                warn!(
                    collection = %kind,
                    index,
                    label = %label,
                    error = %error_chain(&error),
                    "[{kind}] skipping record"
                );
                failures.push(RecordFailure {
                    index,
                    label,
                    error,
                });
            }
        }
    }

    info!(
        collection = %kind,
        phase = %SyncPhase::Summarizing,
        total,
        synced,
        failed = failures.len(),
        "[{kind}] sync finished"
    );

    if synced == 0 && total > 0 {
        return Err(CollectionError::TotalFailure {
            kind,
            total,
            failures,
        });
    }

    Ok(CollectionSummary {
        kind,
        total,
        synced,
        failures,
    })
}

/// Map one record and upsert what it implies, in order. Returns the number of
/// entities written.
fn sync_record<S>(store: &mut S, kind: CollectionKind, record: &RawRecord) -> Result<usize, RecordError>
where
    S: DocumentStore + ?Sized,
{
    let entities = kind.map_record(record)?;
    for entity in &entities {
        store.upsert(entity)?;
    }
    Ok(entities.len())
}
