use std::fmt;

use crate::{
    errors::MappingError,
    mapping::{article::map_article, launch::map_launch},
    models::{entities::Entity, raw::RawRecord},
};

/// The two upstream collections this job mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Launches,
    Articles,
}

impl CollectionKind {
    /// Both collections in the order a full run syncs them.
    pub const ALL: [CollectionKind; 2] = [CollectionKind::Launches, CollectionKind::Articles];

    pub fn name(self) -> &'static str {
        match self {
            CollectionKind::Launches => "launches",
            CollectionKind::Articles => "articles",
        }
    }

    /// Maps one record into the entities it implies, in upsert order.
    pub fn map_record(self, record: &RawRecord) -> Result<Vec<Entity>, MappingError> {
        match self {
            CollectionKind::Launches => Ok(map_launch(record)?.into_entities()),
            CollectionKind::Articles => Ok(vec![Entity::Article(map_article(record)?)]),
        }
    }

    /// Human identifier for diagnostics; falls back to `#<index>`.
    pub fn record_label(self, record: &RawRecord, index: usize) -> String {
        let keys: &[&str] = match self {
            CollectionKind::Launches => &["name"],
            CollectionKind::Articles => &["title"],
        };
        record.label(keys).unwrap_or_else(|| format!("#{index}"))
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
