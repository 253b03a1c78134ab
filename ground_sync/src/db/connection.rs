//! SQLite connection helpers.
//!
//! [`connect_sqlite`] opens a connection and applies the connection-wide
//! PRAGMAs: WAL journaling and a 5000ms busy_timeout.

use diesel::{Connection, SqliteConnection, connection::SimpleConnection};

use crate::store::StoreError;

/// Strip the URL scheme forms accepted in `DB_CONNECTION_STRING`, leaving what
/// SQLite expects: a file path, `file:` URI, or `:memory:`.
pub fn sqlite_path(database_url: &str) -> &str {
    database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url)
}

/// Open a SQLite connection and apply connection-wide PRAGMAs.
pub fn connect_sqlite(database_url: &str) -> Result<SqliteConnection, StoreError> {
    let path = sqlite_path(database_url);
    let mut conn = SqliteConnection::establish(path).map_err(|source| StoreError::Connect {
        url: database_url.to_string(),
        source,
    })?;

    conn.batch_execute("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")
        .map_err(StoreError::Setup)?;
    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_prefixes_are_stripped() {
        assert_eq!(sqlite_path("sqlite:///tmp/ground.db"), "/tmp/ground.db");
        assert_eq!(sqlite_path("sqlite:ground.db"), "ground.db");
        assert_eq!(sqlite_path("/var/lib/ground.db"), "/var/lib/ground.db");
        assert_eq!(sqlite_path(":memory:"), ":memory:");
    }
}
