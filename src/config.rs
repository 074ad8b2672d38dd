//! Content source configuration
//!
//! Endpoint templates for the WordPress REST API plus the cache, timeout and
//! fallback switches consumed by the content service.

use std::time::Duration;

use crate::content::ContentCategory;

/// Default WordPress REST base URL
pub const DEFAULT_BASE_URL: &str = "https://your-wordpress-site.com/wp-json/wp/v2";

/// Default request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Default cache expiration in minutes
pub const DEFAULT_CACHE_EXPIRATION_MINUTES: u64 = 60;

/// Endpoint paths relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointPaths {
    pub designs: String,
    pub silhouettes: String,
    pub pages: String,
}

impl Default for EndpointPaths {
    fn default() -> Self {
        Self {
            designs: "/designs".to_string(),
            silhouettes: "/silhouettes".to_string(),
            pages: "/pages".to_string(),
        }
    }
}

/// Cache behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// Whether responses are cached at all
    pub enabled: bool,
    /// Minutes after which an entry is treated as absent
    pub expiration_minutes: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            expiration_minutes: DEFAULT_CACHE_EXPIRATION_MINUTES,
        }
    }
}

impl CacheSettings {
    /// Cache time-to-live in milliseconds, saturating at `i64::MAX`
    pub fn ttl_millis(&self) -> i64 {
        i64::try_from(self.expiration_minutes)
            .unwrap_or(i64::MAX)
            .saturating_mul(60 * 1000)
    }
}

/// Full configuration for the content service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// WordPress REST base, e.g. `https://example.com/wp-json/wp/v2`
    pub base_url: String,
    pub endpoints: EndpointPaths,
    /// Append `_embed` so featured media is inlined in the response
    pub embed_media: bool,
    pub cache: CacheSettings,
    /// Deadline for a single content request
    pub request_timeout: Duration,
    /// Serve hand-authored content when the remote source is unavailable
    pub use_fallback: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoints: EndpointPaths::default(),
            embed_media: true,
            cache: CacheSettings::default(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            use_fallback: true,
        }
    }
}

/// Builds a `slug=<slug>` query parameter
pub fn slug_param(slug: &str) -> String {
    format!("slug={}", slug)
}

impl ContentConfig {
    /// Builds the request URL for a content category
    ///
    /// Page categories filter by slug; all categories append `_embed` when
    /// media embedding is on. A trailing slash on the base URL is ignored.
    pub fn endpoint_url(&self, category: ContentCategory) -> String {
        let base = self.base_url.trim_end_matches('/');

        let (path, slug) = match category {
            ContentCategory::Designs => (&self.endpoints.designs, None),
            ContentCategory::Silhouettes => (&self.endpoints.silhouettes, None),
            ContentCategory::AboutPage => (&self.endpoints.pages, Some("about")),
            ContentCategory::HomePage => (&self.endpoints.pages, Some("home")),
        };

        let mut params = Vec::new();
        if let Some(slug) = slug {
            params.push(slug_param(slug));
        }
        if self.embed_media {
            params.push("_embed".to_string());
        }

        if params.is_empty() {
            format!("{}{}", base, path)
        } else {
            format!("{}{}?{}", base, path, params.join("&"))
        }
    }
}
