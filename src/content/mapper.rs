//! Normalization of raw WordPress REST records
//!
//! Every function here is total: missing or malformed fields become empty
//! strings or empty lists, and a payload that is not a JSON array yields no
//! items at all. Nothing in this module returns an error.

use serde_json::Value;

use super::{AboutContent, CarouselItem, DesignItem, GarmentType, HomeContent, SilhouetteItem};

/// JSON pointer to the first featured media URL of an embedded post
const FEATURED_MEDIA_URL: &str = "/_embedded/wp:featuredmedia/0/source_url";

/// Read-only view over one raw record returned by the WordPress API
#[derive(Debug, Clone, Copy)]
pub struct RawContentRecord<'a>(&'a Value);

impl<'a> RawContentRecord<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// Post ID as a string; numeric IDs are stringified
    pub fn id(&self) -> String {
        self.0.get("id").map(scalar_string).unwrap_or_default()
    }

    /// Rendered title
    pub fn title(&self) -> String {
        rendered(self.0.get("title"))
    }

    /// Rendered body
    pub fn body(&self) -> String {
        rendered(self.0.get("content"))
    }

    /// URL of the first embedded featured media, empty if any link is missing
    pub fn featured_image(&self) -> String {
        self.0
            .pointer(FEATURED_MEDIA_URL)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Metadata field, read from `meta` first and then from the top-level
    /// REST field the site plugin registers under the same name
    pub fn meta_field(&self, key: &str) -> Option<&'a Value> {
        let from_meta = self.0.get("meta").and_then(|meta| meta.get(key));
        match from_meta {
            Some(value) if !is_blank(value) => Some(value),
            _ => self.0.get(key).filter(|value| !is_blank(value)),
        }
    }

    /// Metadata field as a string, empty if absent
    pub fn meta_string(&self, key: &str) -> String {
        self.meta_field(key).map(scalar_string).unwrap_or_default()
    }
}

/// Reads `{"rendered": "..."}`, accepting a bare string too
fn rendered(field: Option<&Value>) -> String {
    match field {
        Some(Value::String(s)) => s.clone(),
        Some(value) => value
            .get("rendered")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        None => String::new(),
    }
}

/// Renders strings and numbers as text; everything else is empty
fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Iterates the object records of a raw list payload
fn records(raw: &Value) -> impl Iterator<Item = RawContentRecord<'_>> {
    raw.as_array()
        .into_iter()
        .flatten()
        .filter(|value| value.is_object())
        .map(RawContentRecord::new)
}

pub fn map_design(record: RawContentRecord<'_>) -> DesignItem {
    DesignItem {
        id: record.id(),
        title: record.title(),
        description: record.body(),
        image_url: record.featured_image(),
        price: record.meta_string("price"),
        category: GarmentType::coerce(&record.meta_string("category")),
    }
}

pub fn map_silhouette(record: RawContentRecord<'_>) -> SilhouetteItem {
    SilhouetteItem {
        id: record.id(),
        title: record.title(),
        description: record.body(),
        image_url: record.featured_image(),
    }
}

pub fn map_about(record: RawContentRecord<'_>) -> AboutContent {
    AboutContent {
        title: record.title(),
        content: record.body(),
        featured_image: record.featured_image(),
    }
}

pub fn map_home(record: RawContentRecord<'_>) -> HomeContent {
    let carousel_items = record
        .meta_field("carousel_items")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter(|entry| entry.is_object())
                .map(map_carousel_item)
                .collect()
        })
        .unwrap_or_default();

    HomeContent {
        title: record.title(),
        content: record.body(),
        banner_image: record.meta_string("banner_image"),
        carousel_items,
    }
}

fn map_carousel_item(entry: &Value) -> CarouselItem {
    let field = |key: &str| entry.get(key).map(scalar_string).unwrap_or_default();
    CarouselItem {
        title: field("title"),
        description: field("description"),
        image: field("image"),
    }
}

/// Maps a designs list payload
pub fn map_designs(raw: &Value) -> Vec<DesignItem> {
    records(raw).map(map_design).collect()
}

/// Maps a silhouettes list payload
pub fn map_silhouettes(raw: &Value) -> Vec<SilhouetteItem> {
    records(raw).map(map_silhouette).collect()
}

/// Maps the first page of an about-page query, if any
pub fn map_about_page(raw: &Value) -> Option<AboutContent> {
    records(raw).next().map(map_about)
}

/// Maps the first page of a home-page query, if any
pub fn map_home_page(raw: &Value) -> Option<HomeContent> {
    records(raw).next().map(map_home)
}
