//! Mirrors the upstream launch and article feeds into a local document store.
//!
//! The binary wires these together: [`config::SyncConfig`] resolves the
//! endpoints, [`store::sqlite::SqliteStore`] holds the single store
//! connection, and [`sync::coordinator::run_sync`] drives each collection
//! through [`sync::sync_collection`].

pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod report;
pub mod schema;
pub mod store;
pub mod sync;
