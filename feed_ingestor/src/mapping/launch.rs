use serde_json::Value;

use crate::{
    errors::MappingError,
    mapping::Fields,
    models::{
        entities::{Entity, Launch, Mission, Pad, Provider, Rocket},
        raw::RawRecord,
    },
};

/// Everything one `launches` record implies.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchGraph {
    pub rocket: Rocket,
    pub mission: Option<Mission>,
    pub pad: Pad,
    pub provider: Provider,
    pub launch: Launch,
}

impl LaunchGraph {
    /// Entities in upsert order. The launch goes last because it references
    /// the other four.
    pub fn into_entities(self) -> Vec<Entity> {
        let mut out = Vec::with_capacity(5);
        out.push(Entity::Rocket(self.rocket));
        if let Some(m) = self.mission {
            out.push(Entity::Mission(m));
        }
        out.push(Entity::Pad(self.pad));
        out.push(Entity::Provider(self.provider));
        out.push(Entity::Launch(self.launch));
        out
    }
}

/// Maps one `launches` record.
///
/// Rejects the record when the launch id, `rocket.configuration`, `pad`,
/// `launch_service_provider` or `status.id` is missing. `mission` is optional.
pub fn map_launch(record: &RawRecord) -> Result<LaunchGraph, MappingError> {
    let f = Fields::root(record.as_object()?);

    let id = f.required_str("id")?;

    let rc = f.object("rocket")?.object("configuration")?;
    let rocket = Rocket {
        id: rc.required_i64("id")?,
        name: rc.opt_str("name"),
        description: rc.opt_str("description"),
        info_url: rc.opt_str("info_url"),
        wiki_url: rc.opt_str("wiki_url"),
    };

    let mission = f
        .optional_object("mission")?
        .map(|m| -> Result<Mission, MappingError> {
            Ok(Mission {
                id: m.required_i64("id")?,
                name: m.opt_str("name"),
                mission_type: m.opt_str("type"),
                description: m.opt_str("description"),
            })
        })
        .transpose()?;

    let p = f.object("pad")?;
    let pad = Pad {
        id: p.required_i64("id")?,
        location_name: p.opt_str("name"),
        wiki_url: p.opt_str("wiki_url"),
        map_url: p.opt_str("map_url"),
        map_image_url: p.opt_str("map_image"),
    };

    let lsp = f.object("launch_service_provider")?;
    let provider = Provider {
        id: lsp.required_i64("id")?,
        name: lsp.opt_str("name"),
        country_code: lsp.opt_str("country_code"),
        description: lsp.opt_str("description"),
        logo_url: lsp.opt_str("logo_url"),
        info_url: lsp.opt_str("info_url"),
        wiki_url: lsp.opt_str("wiki_url"),
    };

    let status = f.object("status")?.required_i64("id")?;

    let launch = Launch {
        id,
        name: f.opt_str("name"),
        status,
        date: f.opt_str("net"),
        slug: f.opt_str("slug"),
        image_url: image_url(f.raw("image")),
        watch_url: watch_url(&f.list("vidURLs")),
        rocket: rocket.id,
        mission: mission.as_ref().map(|m| m.id),
        pad: pad.id,
        provider: provider.id,
    };

    Ok(LaunchGraph {
        rocket,
        mission,
        pad,
        provider,
        launch,
    })
}

// Older API versions publish `image` as a URL string, newer ones as an object.
fn image_url(image: Option<&Value>) -> Option<String> {
    match image? {
        Value::String(s) => Some(s.clone()),
        Value::Object(o) => o.get("image_url").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

fn watch_url(videos: &[Value]) -> Option<String> {
    videos
        .first()?
        .get("url")
        .and_then(Value::as_str)
        .map(str::to_string)
}
