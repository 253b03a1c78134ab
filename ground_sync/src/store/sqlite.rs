use diesel::{SqliteConnection, connection::SimpleConnection, insert_into, prelude::*};
use feed_ingestor::Entity;

use crate::{
    db::{connection::connect_sqlite, migrate},
    models::{ArticleRow, LaunchRow, MissionRow, PadRow, ProviderRow, RocketRow},
    schema::{articles, launches, missions, pads, providers, rockets},
    store::{DocumentStore, StoreError},
};

/// SQLite-backed store holding the run's single connection.
pub struct SqliteStore {
    conn: SqliteConnection,
}

impl SqliteStore {
    /// Opens the database, applies PRAGMAs, and runs pending migrations.
    pub fn connect(database_url: &str) -> Result<Self, StoreError> {
        let mut conn = connect_sqlite(database_url)?;
        migrate::run_pending(&mut conn)?;
        tracing::info!("connected to database");
        Ok(Self { conn })
    }

    /// Direct access to the underlying connection, for inspection.
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}

impl DocumentStore for SqliteStore {
    fn upsert(&mut self, entity: &Entity) -> Result<(), StoreError> {
        let conn = &mut self.conn;

        // INSERT .. ON CONFLICT(id) DO UPDATE SET <every non-key column>
        let res = match entity {
            Entity::Article(a) => {
                let row = ArticleRow::try_from(a).map_err(|source| StoreError::Encode {
                    kind: entity.kind(),
                    id: entity.id(),
                    source,
                })?;
                insert_into(articles::table)
                    .values(&row)
                    .on_conflict(articles::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)
            }
            Entity::Rocket(r) => {
                let row = RocketRow::from(r);
                insert_into(rockets::table)
                    .values(&row)
                    .on_conflict(rockets::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)
            }
            Entity::Mission(m) => {
                let row = MissionRow::from(m);
                insert_into(missions::table)
                    .values(&row)
                    .on_conflict(missions::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)
            }
            Entity::Pad(p) => {
                let row = PadRow::from(p);
                insert_into(pads::table)
                    .values(&row)
                    .on_conflict(pads::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)
            }
            Entity::Provider(p) => {
                let row = ProviderRow::from(p);
                insert_into(providers::table)
                    .values(&row)
                    .on_conflict(providers::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)
            }
            Entity::Launch(l) => {
                let row = LaunchRow::from(l);
                insert_into(launches::table)
                    .values(&row)
                    .on_conflict(launches::id)
                    .do_update()
                    .set(&row)
                    .execute(conn)
            }
        };

        res.map(|_| ()).map_err(|source| StoreError::Query {
            kind: entity.kind(),
            id: entity.id(),
            source,
        })
    }

    fn disconnect(mut self) -> Result<(), StoreError> {
        self.conn
            .batch_execute("PRAGMA optimize;")
            .map_err(StoreError::Disconnect)?;
        drop(self.conn);
        tracing::info!("disconnected from database");
        Ok(())
    }
}
