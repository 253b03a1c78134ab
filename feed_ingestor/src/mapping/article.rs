use crate::{
    errors::MappingError,
    mapping::Fields,
    models::{entities::Article, raw::RawRecord},
};

/// Maps one `articles` record. Only the integer `id` is required.
pub fn map_article(record: &RawRecord) -> Result<Article, MappingError> {
    let f = Fields::root(record.as_object()?);

    Ok(Article {
        id: f.required_i64("id")?,
        title: f.opt_str("title"),
        url: f.opt_str("url"),
        image_url: f.opt_str("image_url"),
        news_site: f.opt_str("news_site"),
        summary: f.opt_str("summary"),
        published_date: f.opt_str("published_at"),
        updated_date: f.opt_str("updated_at"),
        featured: f.bool_or("featured", false),
        launches: f.list("launches"),
        events: f.list("events"),
    })
}
