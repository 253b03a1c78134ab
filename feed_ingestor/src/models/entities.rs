//! Flat target entities written to the document store.
//!
//! Every entity is replaced wholesale on each sync; none of them carries
//! behaviour beyond identification.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// A news article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: i64,
    pub title: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub news_site: Option<String>,
    pub summary: Option<String>,
    pub published_date: Option<String>,
    pub updated_date: Option<String>,
    pub featured: bool,
    /// Launch references exactly as published by the feed.
    pub launches: Vec<Value>,
    /// Event references exactly as published by the feed.
    pub events: Vec<Value>,
}

/// Launch vehicle configuration (e.g. Falcon 9).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rocket {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub info_url: Option<String>,
    pub wiki_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mission {
    pub id: i64,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub mission_type: Option<String>,
    pub description: Option<String>,
}

/// Launch pad (e.g. Boca Chica).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pad {
    pub id: i64,
    pub location_name: Option<String>,
    pub wiki_url: Option<String>,
    pub map_url: Option<String>,
    pub map_image_url: Option<String>,
}

/// Launch service provider (e.g. SpaceX).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provider {
    pub id: i64,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub info_url: Option<String>,
    pub wiki_url: Option<String>,
}

/// A launch and its foreign keys into the other entity kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Launch {
    pub id: String,
    pub name: Option<String>,
    pub status: i64,
    pub date: Option<String>,
    pub slug: Option<String>,
    pub image_url: Option<String>,
    pub watch_url: Option<String>,
    pub rocket: i64,
    pub mission: Option<i64>,
    pub pad: i64,
    pub provider: i64,
}

/// Discriminates the store collection an entity lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Article,
    Rocket,
    Mission,
    Pad,
    Provider,
    Launch,
}

impl EntityKind {
    /// Store collection (table) name.
    pub fn collection(self) -> &'static str {
        match self {
            EntityKind::Article => "articles",
            EntityKind::Rocket => "rockets",
            EntityKind::Mission => "missions",
            EntityKind::Pad => "pads",
            EntityKind::Provider => "providers",
            EntityKind::Launch => "launches",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

/// Store key of an entity. Launches are keyed by a string id, everything else
/// by an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityId {
    Numeric(i64),
    Slug(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Numeric(n) => write!(f, "{n}"),
            EntityId::Slug(s) => f.write_str(s),
        }
    }
}

/// Any entity the mapper can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Article(Article),
    Rocket(Rocket),
    Mission(Mission),
    Pad(Pad),
    Provider(Provider),
    Launch(Launch),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Article(_) => EntityKind::Article,
            Entity::Rocket(_) => EntityKind::Rocket,
            Entity::Mission(_) => EntityKind::Mission,
            Entity::Pad(_) => EntityKind::Pad,
            Entity::Provider(_) => EntityKind::Provider,
            Entity::Launch(_) => EntityKind::Launch,
        }
    }

    pub fn id(&self) -> EntityId {
        match self {
            Entity::Article(a) => EntityId::Numeric(a.id),
            Entity::Rocket(r) => EntityId::Numeric(r.id),
            Entity::Mission(m) => EntityId::Numeric(m.id),
            Entity::Pad(p) => EntityId::Numeric(p.id),
            Entity::Provider(p) => EntityId::Numeric(p.id),
            Entity::Launch(l) => EntityId::Slug(l.id.clone()),
        }
    }

    /// The full field set as a JSON document, identifier included.
    pub fn to_document(&self) -> Result<Value, serde_json::Error> {
        match self {
            Entity::Article(a) => serde_json::to_value(a),
            Entity::Rocket(r) => serde_json::to_value(r),
            Entity::Mission(m) => serde_json::to_value(m),
            Entity::Pad(p) => serde_json::to_value(p),
            Entity::Provider(p) => serde_json::to_value(p),
            Entity::Launch(l) => serde_json::to_value(l),
        }
    }
}
