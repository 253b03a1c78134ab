mod common;
use common::{ReleaseFails, article, count, launch, page, setup_db};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use feed_ingestor::{CollectionKind, Url, sources::http::HttpSource};
use ground_sync::report::render_summary;
use ground_sync::store::memory::MemoryStore;
use ground_sync::sync::coordinator::{SyncStatus, SyncTarget, run_and_release, run_sync};
use ground_sync::sync::{CollectionError, SyncPhase};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn plan(server: &MockServer) -> Vec<SyncTarget> {
    let base = server.uri();
    vec![
        SyncTarget {
            kind: CollectionKind::Launches,
            url: Url::parse(&format!("{base}/2.2.0/launch/upcoming/")).unwrap(),
        },
        SyncTarget {
            kind: CollectionKind::Articles,
            url: Url::parse(&format!("{base}/v4/articles/")).unwrap(),
        },
    ]
}

#[tokio::test]
async fn both_collections_sync_into_sqlite() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.2.0/launch/upcoming/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            launch("a", 164, 80, 121, Some(7000)),
            launch("b", 164, 81, 121, None),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/articles/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page(vec![article(1), article(2), article(3)])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (_db, mut store) = setup_db();
    let feed = HttpSource::new().unwrap();

    let report = run_sync(&feed, &mut store, &plan(&server)).await;

    assert!(report.is_success());
    assert!(report.started_at <= report.finished_at);
    let kinds: Vec<_> = report.collections.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, [CollectionKind::Launches, CollectionKind::Articles]);
    assert_eq!(report.get(CollectionKind::Launches).unwrap().count(), 2);
    assert_eq!(report.get(CollectionKind::Articles).unwrap().count(), 3);

    let conn = store.connection();
    assert_eq!(count(conn, "launches"), 2);
    assert_eq!(count(conn, "articles"), 3);
    assert_eq!(count(conn, "pads"), 2);
    assert_eq!(count(conn, "missions"), 1);
}

#[tokio::test]
async fn failed_collection_does_not_stop_the_next_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.2.0/launch/upcoming/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/articles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![
            article(1),
            json!({"title": "no id"}),
        ])))
        .mount(&server)
        .await;

    let (_db, mut store) = setup_db();
    let feed = HttpSource::new().unwrap();

    let report = run_sync(&feed, &mut store, &plan(&server)).await;

    assert!(!report.is_success());

    let launches = report.get(CollectionKind::Launches).unwrap();
    assert_eq!(launches.status(), SyncStatus::Failed);
    assert_eq!(launches.count(), 0);
    let err = launches.error().unwrap();
    assert_eq!(err.phase(), SyncPhase::Fetching);
    assert!(matches!(err, CollectionError::Fetch { .. }));

    let articles = report.get(CollectionKind::Articles).unwrap();
    assert_eq!(articles.status(), SyncStatus::Completed);
    assert_eq!(articles.count(), 1);
    assert_eq!(articles.failures().len(), 1);
    assert_eq!(articles.failures()[0].label, "no id");

    let failed: Vec<_> = report.failed().map(|c| c.kind).collect();
    assert_eq!(failed, [CollectionKind::Launches]);

    assert_eq!(count(store.connection(), "articles"), 1);
    assert_eq!(count(store.connection(), "launches"), 0);

    let summary = render_summary(&report);
    assert!(summary.contains("Launches: 0 synced (failed)"), "{summary}");
    assert!(summary.contains("Articles: 1 synced (completed), 1 skipped"), "{summary}");
}

#[tokio::test]
async fn throttled_payload_fails_validation_only_for_that_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.2.0/launch/upcoming/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![launch("a", 1, 2, 3, None)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/articles/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"results": {"oops": true}})),
        )
        .mount(&server)
        .await;

    let (_db, mut store) = setup_db();
    let feed = HttpSource::new().unwrap();

    let report = run_sync(&feed, &mut store, &plan(&server)).await;

    assert!(!report.is_success());
    assert_eq!(
        report.get(CollectionKind::Launches).unwrap().status(),
        SyncStatus::Completed
    );
    let articles = report.get(CollectionKind::Articles).unwrap();
    assert_eq!(articles.error().unwrap().phase(), SyncPhase::Validating);
}

#[tokio::test]
async fn failed_release_does_not_change_the_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/2.2.0/launch/upcoming/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![launch("a", 1, 2, 3, None)])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/articles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![article(1)])))
        .mount(&server)
        .await;

    let released = Arc::new(AtomicBool::new(false));
    let store = ReleaseFails {
        inner: MemoryStore::new(),
        released: Arc::clone(&released),
    };
    let feed = HttpSource::new().unwrap();

    let report = run_and_release(&feed, store, &plan(&server)).await;

    assert!(released.load(Ordering::SeqCst));
    assert!(report.is_success());
    assert_eq!(report.get(CollectionKind::Launches).unwrap().count(), 1);
    assert_eq!(report.get(CollectionKind::Articles).unwrap().count(), 1);
}

#[tokio::test]
async fn store_is_released_after_a_failed_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let released = Arc::new(AtomicBool::new(false));
    let store = ReleaseFails {
        inner: MemoryStore::new(),
        released: Arc::clone(&released),
    };
    let feed = HttpSource::new().unwrap();

    let report = run_and_release(&feed, store, &plan(&server)).await;

    assert!(released.load(Ordering::SeqCst));
    assert!(!report.is_success());
    assert_eq!(report.failed().count(), 2);
}
