//! Fetching, validating and mapping the upstream launch and article feeds.
//!
//! Nothing in here touches the document store: a collection payload comes in
//! through a [`sources::CollectionSource`], [`validate::extract_results`] pulls
//! out the raw records, and [`mapping`] turns each record into the entities it
//! implies.

pub mod errors;
pub mod mapping;
pub mod models;
pub mod sources;
pub mod text;
pub mod validate;

pub use errors::{FetchError, MappingError, ShapeError, SourceInitError};
pub use models::collection::CollectionKind;
pub use models::entities::{Entity, EntityId, EntityKind};
pub use models::raw::RawRecord;
pub use reqwest::Url;
