#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};
use feed_ingestor::{Entity, EntityId, FetchError, Url, sources::CollectionSource};
use ground_sync::store::{DocumentStore, StoreError, sqlite::SqliteStore};
use serde_json::{Value, json};
use tempfile::TempDir;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}
#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer, column_name = "timeout")]
    busy_timeout: i32,
}
#[derive(QueryableByName)]
struct Count {
    #[diesel(sql_type = BigInt)]
    n: i64,
}

pub struct TestDb {
    _dir: TempDir,    // keep alive for the life of the test
    pub path: String, // <tmpdir>/test.db
}

/// Fresh migrated database in a temp dir, plus a store connected to it.
pub fn setup_db() -> (TestDb, SqliteStore) {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    let store = SqliteStore::connect(&path).expect("connect");
    (TestDb { _dir: dir, path }, store)
}

pub fn assert_sqlite_pragmas(conn: &mut SqliteConnection) {
    use diesel::sql_query;

    let jm: JournalMode = sql_query("PRAGMA journal_mode;").get_result(conn).unwrap();
    assert_eq!(jm.journal_mode.to_lowercase(), "wal");

    let bt: BusyTimeout = sql_query("PRAGMA busy_timeout;").get_result(conn).unwrap();
    assert_eq!(bt.busy_timeout, 5000);
}

pub fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
    let c: Count = diesel::sql_query(format!("SELECT COUNT(*) AS n FROM {table}"))
        .get_result(conn)
        .unwrap();
    c.n
}

pub fn url(path: &str) -> Url {
    Url::parse(&format!("https://api.example.test{path}")).unwrap()
}

/// What a [`StaticFeed`] answers for one URL.
pub enum Canned {
    Json(Value),
    Status(u16, &'static str),
}

/// In-memory stand-in for the HTTP source.
#[derive(Default)]
pub struct StaticFeed {
    responses: HashMap<String, Canned>,
}

impl StaticFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &Url, canned: Canned) -> Self {
        self.responses.insert(url.to_string(), canned);
        self
    }
}

#[async_trait]
impl CollectionSource for StaticFeed {
    async fn fetch(&self, url: &Url) -> Result<Value, FetchError> {
        match self.responses.get(url.as_str()) {
            Some(Canned::Json(v)) => Ok(v.clone()),
            Some(Canned::Status(status, body)) => Err(FetchError::HttpStatus {
                status: *status,
                reason: "Canned",
                body: body.to_string(),
            }),
            None => Err(FetchError::HttpStatus {
                status: 404,
                reason: "Not Found",
                body: String::new(),
            }),
        }
    }
}

/// Store wrapper that rejects one identifier and passes everything else on.
pub struct FailOn<S> {
    pub inner: S,
    pub id: EntityId,
}

impl<S: DocumentStore> DocumentStore for FailOn<S> {
    fn upsert(&mut self, entity: &Entity) -> Result<(), StoreError> {
        if entity.id() == self.id {
            return Err(StoreError::Query {
                kind: entity.kind(),
                id: entity.id(),
                source: diesel::result::Error::NotFound,
            });
        }
        self.inner.upsert(entity)
    }

    fn disconnect(self) -> Result<(), StoreError> {
        self.inner.disconnect()
    }
}

pub fn page(results: Vec<Value>) -> Value {
    json!({
        "count": results.len(),
        "next": null,
        "previous": null,
        "results": results
    })
}

/// A complete upcoming-launch record.
pub fn launch(id: &str, rocket: i64, pad: i64, provider: i64, mission: Option<i64>) -> Value {
    let mut v = json!({
        "id": id,
        "name": format!("Launch {id}"),
        "slug": format!("launch-{id}"),
        "status": {"id": 1, "name": "Go for Launch", "abbrev": "Go"},
        "net": "2025-06-01T12:00:00Z",
        "image": format!("https://img.example.test/{id}.jpg"),
        "vidURLs": [{"url": format!("https://video.example.test/{id}")}],
        "rocket": {"id": 9000, "configuration": {
            "id": rocket,
            "name": format!("Rocket {rocket}"),
            "description": "Orbital class",
            "info_url": "https://rockets.example.test",
            "wiki_url": "https://wiki.example.test/rocket"
        }},
        "mission": null,
        "pad": {
            "id": pad,
            "name": format!("Pad {pad}"),
            "wiki_url": "https://wiki.example.test/pad",
            "map_url": "https://maps.example.test/pad",
            "map_image": "https://img.example.test/pad.jpg"
        },
        "launch_service_provider": {
            "id": provider,
            "name": format!("Provider {provider}"),
            "country_code": "USA",
            "description": "Launch company",
            "logo_url": "https://img.example.test/logo.png",
            "info_url": "https://provider.example.test",
            "wiki_url": "https://wiki.example.test/provider"
        }
    });
    if let Some(m) = mission {
        v["mission"] = json!({
            "id": m,
            "name": format!("Mission {m}"),
            "type": "Communications",
            "description": "Satellite deployment"
        });
    }
    v
}

/// A complete article record.
pub fn article(id: i64) -> Value {
    json!({
        "id": id,
        "title": format!("Article {id}"),
        "url": format!("https://news.example.test/{id}"),
        "image_url": format!("https://img.example.test/a{id}.jpg"),
        "news_site": "Example News",
        "summary": "Something launched.",
        "published_at": "2025-05-30T08:00:00Z",
        "updated_at": "2025-05-30T09:00:00Z",
        "featured": id % 2 == 0,
        "launches": [{"launch_id": "abc", "provider": "Launch Library 2"}],
        "events": []
    })
}

/// Removes a top-level key from a JSON object.
pub fn without(mut v: Value, key: &str) -> Value {
    v.as_object_mut().unwrap().remove(key);
    v
}

/// Store wrapper whose release always fails. Raises `released` when
/// `disconnect` is reached.
pub struct ReleaseFails<S> {
    pub inner: S,
    pub released: Arc<AtomicBool>,
}

impl<S: DocumentStore> DocumentStore for ReleaseFails<S> {
    fn upsert(&mut self, entity: &Entity) -> Result<(), StoreError> {
        self.inner.upsert(entity)
    }

    fn disconnect(self) -> Result<(), StoreError> {
        self.released.store(true, Ordering::SeqCst);
        Err(StoreError::Disconnect(
            diesel::result::Error::BrokenTransactionManager,
        ))
    }
}
