//! Content models for the All Hat and No Cattle site
//!
//! This module contains the normalized, page-facing content types along with
//! the client pieces that produce them: the timeout-guarded fetcher, the
//! WordPress record mapper, the static fallback sets and the orchestrating
//! content service.

pub mod fallback;
pub mod fetcher;
pub mod mapper;
pub mod service;

pub use fetcher::{fetch_with_timeout, ContentSource, FetchError, HttpSource};
pub use service::{ContentError, ContentService};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of content served by the CMS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentCategory {
    Designs,
    Silhouettes,
    AboutPage,
    HomePage,
}

impl ContentCategory {
    /// All categories in display order
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Designs,
        ContentCategory::Silhouettes,
        ContentCategory::AboutPage,
        ContentCategory::HomePage,
    ];

    /// Storage key for cached content of this category
    pub fn cache_key(self) -> &'static str {
        match self {
            ContentCategory::Designs => "wp_designs",
            ContentCategory::Silhouettes => "wp_silhouettes",
            ContentCategory::AboutPage => "wp_about",
            ContentCategory::HomePage => "wp_home",
        }
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            ContentCategory::Designs => "designs",
            ContentCategory::Silhouettes => "silhouettes",
            ContentCategory::AboutPage => "about",
            ContentCategory::HomePage => "home",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Garment types offered by the atelier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    Jacket,
    Pants,
    Vest,
    /// Default for missing or unrecognized category tags
    #[default]
    Shirt,
}

impl GarmentType {
    /// Coerces an arbitrary category tag into a garment type
    ///
    /// Matching ignores case and surrounding whitespace. Anything outside
    /// jacket, pants, vest and shirt becomes `Shirt`.
    pub fn coerce(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "jacket" => GarmentType::Jacket,
            "pants" => GarmentType::Pants,
            "vest" => GarmentType::Vest,
            _ => GarmentType::Shirt,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GarmentType::Jacket => "jacket",
            GarmentType::Pants => "pants",
            GarmentType::Vest => "vest",
            GarmentType::Shirt => "shirt",
        }
    }
}

/// A single design in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignItem {
    pub id: String,
    pub title: String,
    /// Rendered HTML body
    pub description: String,
    /// Featured image URL, empty when the post has none
    pub image_url: String,
    pub price: String,
    pub category: GarmentType,
}

/// A curated outfit combination
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SilhouetteItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

/// Content of the about page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub title: String,
    pub content: String,
    pub featured_image: String,
}

/// One slide of the homepage carousel
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarouselItem {
    pub title: String,
    pub description: String,
    pub image: String,
}

/// Content of the homepage
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub title: String,
    pub content: String,
    pub banner_image: String,
    pub carousel_items: Vec<CarouselItem>,
}
