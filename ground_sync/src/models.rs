//! Diesel rows mapping the entities onto [`crate::schema`].
//!
//! Each row is used both for `INSERT` and for the `DO UPDATE SET` half of an
//! upsert. `treat_none_as_null` makes the update write every column, so a
//! field that disappears upstream is cleared instead of keeping a stale value.

use diesel::prelude::*;
use feed_ingestor::models::entities::{Article, Launch, Mission, Pad, Provider, Rocket};

use crate::schema::*;

/// A row in [`crate::schema::articles`]. `launches` and `events` hold JSON arrays.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = articles, treat_none_as_null = true, check_for_backend(diesel::sqlite::Sqlite))]
pub struct ArticleRow {
    pub id: i64,
    pub title: Option<String>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub news_site: Option<String>,
    pub summary: Option<String>,
    pub published_date: Option<String>,
    pub updated_date: Option<String>,
    pub featured: bool,
    pub launches: String,
    pub events: String,
}

impl TryFrom<&Article> for ArticleRow {
    type Error = serde_json::Error;

    fn try_from(a: &Article) -> Result<Self, Self::Error> {
        Ok(Self {
            id: a.id,
            title: a.title.clone(),
            url: a.url.clone(),
            image_url: a.image_url.clone(),
            news_site: a.news_site.clone(),
            summary: a.summary.clone(),
            published_date: a.published_date.clone(),
            updated_date: a.updated_date.clone(),
            featured: a.featured,
            launches: serde_json::to_string(&a.launches)?,
            events: serde_json::to_string(&a.events)?,
        })
    }
}

/// A row in [`crate::schema::rockets`].
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = rockets, treat_none_as_null = true, check_for_backend(diesel::sqlite::Sqlite))]
pub struct RocketRow {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub info_url: Option<String>,
    pub wiki_url: Option<String>,
}

impl From<&Rocket> for RocketRow {
    fn from(r: &Rocket) -> Self {
        Self {
            id: r.id,
            name: r.name.clone(),
            description: r.description.clone(),
            info_url: r.info_url.clone(),
            wiki_url: r.wiki_url.clone(),
        }
    }
}

/// A row in [`crate::schema::missions`].
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = missions, treat_none_as_null = true, check_for_backend(diesel::sqlite::Sqlite))]
pub struct MissionRow {
    pub id: i64,
    pub name: Option<String>,
    /// Stored in the `type` column.
    #[diesel(column_name = type_)]
    pub mission_type: Option<String>,
    pub description: Option<String>,
}

impl From<&Mission> for MissionRow {
    fn from(m: &Mission) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            mission_type: m.mission_type.clone(),
            description: m.description.clone(),
        }
    }
}

/// A row in [`crate::schema::pads`].
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = pads, treat_none_as_null = true, check_for_backend(diesel::sqlite::Sqlite))]
pub struct PadRow {
    pub id: i64,
    pub location_name: Option<String>,
    pub wiki_url: Option<String>,
    pub map_url: Option<String>,
    pub map_image_url: Option<String>,
}

impl From<&Pad> for PadRow {
    fn from(p: &Pad) -> Self {
        Self {
            id: p.id,
            location_name: p.location_name.clone(),
            wiki_url: p.wiki_url.clone(),
            map_url: p.map_url.clone(),
            map_image_url: p.map_image_url.clone(),
        }
    }
}

/// A row in [`crate::schema::providers`].
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = providers, treat_none_as_null = true, check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProviderRow {
    pub id: i64,
    pub name: Option<String>,
    pub country_code: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub info_url: Option<String>,
    pub wiki_url: Option<String>,
}

impl From<&Provider> for ProviderRow {
    fn from(p: &Provider) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            country_code: p.country_code.clone(),
            description: p.description.clone(),
            logo_url: p.logo_url.clone(),
            info_url: p.info_url.clone(),
            wiki_url: p.wiki_url.clone(),
        }
    }
}

/// A row in [`crate::schema::launches`]: a launch plus its references to
/// rockets, missions, pads and providers. References are not enforced.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = launches, treat_none_as_null = true, check_for_backend(diesel::sqlite::Sqlite))]
pub struct LaunchRow {
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

impl From<&Launch> for LaunchRow {
    fn from(l: &Launch) -> Self {
        Self {
            id: l.id.clone(),
            name: l.name.clone(),
            status: l.status,
            date: l.date.clone(),
            slug: l.slug.clone(),
            image_url: l.image_url.clone(),
            watch_url: l.watch_url.clone(),
            rocket: l.rocket,
            mission: l.mission,
            pad: l.pad,
            provider: l.provider,
        }
    }
}
