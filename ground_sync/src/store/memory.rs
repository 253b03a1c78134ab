use std::collections::BTreeMap;

use feed_ingestor::{Entity, EntityId, EntityKind};
use serde_json::Value;

use crate::store::{DocumentStore, StoreError};

/// In-process document store: one JSON document per (kind, id).
///
/// Backs `--dry-run`, where the whole pipeline runs but nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: BTreeMap<(EntityKind, EntityId), Value>,
    writes: Vec<(EntityKind, EntityId)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: EntityKind, id: &EntityId) -> Option<&Value> {
        self.docs.get(&(kind, id.clone()))
    }

    /// Number of distinct documents of `kind`.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.docs.keys().filter(|(k, _)| *k == kind).count()
    }

    /// Every upsert call in order, including repeats.
    pub fn writes(&self) -> &[(EntityKind, EntityId)] {
        &self.writes
    }

    /// Snapshot of all documents, ordered by kind then id.
    pub fn documents(&self) -> &BTreeMap<(EntityKind, EntityId), Value> {
        &self.docs
    }
}

impl DocumentStore for MemoryStore {
    fn upsert(&mut self, entity: &Entity) -> Result<(), StoreError> {
        let (kind, id) = (entity.kind(), entity.id());
        let doc = entity.to_document().map_err(|source| StoreError::Encode {
            kind,
            id: id.clone(),
            source,
        })?;
        self.writes.push((kind, id.clone()));
        self.docs.insert((kind, id), doc);
        Ok(())
    }

    fn disconnect(self) -> Result<(), StoreError> {
        tracing::info!(documents = self.docs.len(), writes = self.writes.len(), "released in-memory store");
        Ok(())
    }
}
