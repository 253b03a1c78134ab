//! Run-level sequencing of collection syncs.

use chrono::{DateTime, Utc};
use feed_ingestor::{CollectionKind, Url, sources::CollectionSource};
use tracing::{error, info, warn};

use crate::{
    report::{Stage, error_chain},
    store::DocumentStore,
    sync::{CollectionError, CollectionSummary, RecordFailure, sync_collection},
};

/// One collection to sync and where to fetch it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    pub kind: CollectionKind,
    pub url: Url,
}

/// Terminal state of a collection sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Completed,
    Failed,
}

impl SyncStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Completed => "completed",
            SyncStatus::Failed => "failed",
        }
    }
}

/// Outcome of one collection within a run.
#[derive(Debug)]
pub struct CollectionReport {
    pub kind: CollectionKind,
    pub outcome: Result<CollectionSummary, CollectionError>,
}

impl CollectionReport {
    /// Records fully committed; zero for a failed collection.
    pub fn count(&self) -> usize {
        self.outcome.as_ref().map_or(0, |s| s.synced)
    }

    pub fn status(&self) -> SyncStatus {
        match self.outcome {
            Ok(_) => SyncStatus::Completed,
            Err(_) => SyncStatus::Failed,
        }
    }

    pub fn error(&self) -> Option<&CollectionError> {
        self.outcome.as_ref().err()
    }

    /// Skipped records, whether the collection completed or totally failed.
    pub fn failures(&self) -> &[RecordFailure] {
        match &self.outcome {
            Ok(s) => &s.failures,
            Err(e) => e.failures(),
        }
    }
}

/// Aggregate of every collection synced in one run.
#[derive(Debug)]
pub struct RunReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub collections: Vec<CollectionReport>,
}

impl RunReport {
    /// True iff every collection completed. Skipped records do not count
    /// against the run.
    pub fn is_success(&self) -> bool {
        self.collections
            .iter()
            .all(|c| c.status() == SyncStatus::Completed)
    }

    pub fn get(&self, kind: CollectionKind) -> Option<&CollectionReport> {
        self.collections.iter().find(|c| c.kind == kind)
    }

    /// Collections that ended in `Failed`, in run order.
    pub fn failed(&self) -> impl Iterator<Item = &CollectionReport> {
        self.collections
            .iter()
            .filter(|c| c.status() == SyncStatus::Failed)
    }
}

/// Syncs every target in order against the one store.
///
/// A failed collection never stops the ones after it.
pub async fn run_sync<C, S>(feed: &C, store: &mut S, plan: &[SyncTarget]) -> RunReport
where
    C: CollectionSource + ?Sized,
    S: DocumentStore + ?Sized,
{
    let started_at = Utc::now();
    let steps = plan.len();
    let mut collections = Vec::with_capacity(steps);

    for (i, target) in plan.iter().enumerate() {
        let step = i + 1;
        let kind = target.kind;
        info!("[Step {step}/{steps}] Syncing {kind}...");

        let outcome = sync_collection(feed, store, kind, &target.url).await;
        match &outcome {
            Ok(summary) => info!(
                collection = %kind,
                synced = summary.synced,
                skipped = summary.failures.len(),
                "[Step {step}/{steps}] {kind} sync complete"
            ),
            Err(err) => error!(
                collection = %kind,
                phase = %err.phase(),
                "[Step {step}/{steps}] {kind} sync failed: {}",
                error_chain(err)
            ),
        }

        collections.push(CollectionReport { kind, outcome });
    }

    RunReport {
        started_at,
        finished_at: Utc::now(),
        collections,
    }
}

/// Runs the plan, then releases `store` whatever the outcome.
///
/// A failed release is logged and leaves the report untouched.
pub async fn run_and_release<C, S>(feed: &C, mut store: S, plan: &[SyncTarget]) -> RunReport
where
    C: CollectionSource + ?Sized,
    S: DocumentStore,
{
    let report = run_sync(feed, &mut store, plan).await;

    if let Err(e) = store.disconnect() {
        warn!(
            stage = %Stage::DatabaseDisconnection,
            error = %error_chain(&e),
            "failed to release store"
        );
    }
    report
}
