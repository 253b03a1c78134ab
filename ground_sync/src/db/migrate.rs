//! Embedded schema migrations.

use diesel::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use crate::{db::connection::connect_sqlite, store::StoreError};

/// Embedded Diesel migrations bundled with this crate.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applies every pending migration on an open connection.
pub fn run_pending(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(StoreError::Migration)?;
    if !applied.is_empty() {
        tracing::info!(count = applied.len(), "applied database migrations");
    }
    Ok(())
}

/// Opens the database at `url` and brings its schema up to date.
pub fn run_sqlite(url: &str) -> Result<(), StoreError> {
    let mut conn = connect_sqlite(url)?;
    run_pending(&mut conn)
}
