//! Content service: cache, fetch, normalize, fall back
//!
//! Each category follows the same path. A fresh cache entry is returned as is.
//! Otherwise the category endpoint is fetched under the configured deadline,
//! mapped, cached and returned. Any failure along the way yields the
//! category's static fallback, which is never written to the cache.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::fetcher::{fetch_with_timeout, ContentSource, FetchError, HttpSource};
use super::{fallback, mapper};
use super::{AboutContent, ContentCategory, DesignItem, HomeContent, SilhouetteItem};
use crate::cache::CacheStore;
use crate::config::ContentConfig;

/// Why live content could not be produced for a category
#[derive(Debug, Error)]
pub enum ContentError {
    /// The request itself failed or timed out
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The response held no usable records
    #[error("No usable {category} content in response")]
    Empty { category: ContentCategory },
}

/// Serves normalized site content from cache, the CMS, or static fallbacks
#[derive(Debug, Clone)]
pub struct ContentService<S = HttpSource> {
    source: S,
    cache: CacheStore,
    config: ContentConfig,
}

impl ContentService<HttpSource> {
    /// Creates a service talking to the CMS over HTTP
    pub fn with_http(cache: CacheStore, config: ContentConfig) -> Self {
        Self::new(HttpSource::new(), cache, config)
    }
}

impl<S: ContentSource> ContentService<S> {
    pub fn new(source: S, cache: CacheStore, config: ContentConfig) -> Self {
        Self {
            source,
            cache,
            config,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Gallery designs; never fails
    pub async fn fetch_designs(&self) -> Vec<DesignItem> {
        let result = self.try_fetch_designs().await;
        self.resolve(ContentCategory::Designs, result, fallback::designs)
    }

    /// Outfit combinations; never fails
    pub async fn fetch_silhouettes(&self) -> Vec<SilhouetteItem> {
        let result = self.try_fetch_silhouettes().await;
        self.resolve(ContentCategory::Silhouettes, result, fallback::silhouettes)
    }

    /// About page; never fails
    pub async fn fetch_about_content(&self) -> AboutContent {
        let result = self.try_fetch_about_content().await;
        self.resolve(ContentCategory::AboutPage, result, fallback::about_content)
    }

    /// Homepage; never fails
    pub async fn fetch_home_content(&self) -> HomeContent {
        let result = self.try_fetch_home_content().await;
        self.resolve(ContentCategory::HomePage, result, fallback::home_content)
    }

    pub async fn try_fetch_designs(&self) -> Result<Vec<DesignItem>, ContentError> {
        self.load(ContentCategory::Designs, |raw| {
            non_empty(mapper::map_designs(raw))
        })
        .await
    }

    pub async fn try_fetch_silhouettes(&self) -> Result<Vec<SilhouetteItem>, ContentError> {
        self.load(ContentCategory::Silhouettes, |raw| {
            non_empty(mapper::map_silhouettes(raw))
        })
        .await
    }

    pub async fn try_fetch_about_content(&self) -> Result<AboutContent, ContentError> {
        self.load(ContentCategory::AboutPage, mapper::map_about_page)
            .await
    }

    pub async fn try_fetch_home_content(&self) -> Result<HomeContent, ContentError> {
        self.load(ContentCategory::HomePage, mapper::map_home_page)
            .await
    }

    /// Cache check, then fetch and map; only successful results are cached
    async fn load<T, F>(&self, category: ContentCategory, map: F) -> Result<T, ContentError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&Value) -> Option<T>,
    {
        if let Some(cached) = self.cache.get::<T>(category) {
            return Ok(cached);
        }

        let url = self.config.endpoint_url(category);
        tracing::debug!(%category, %url, "fetching content");

        let raw = fetch_with_timeout(&self.source, &url, self.config.request_timeout).await?;
        let content = map(&raw).ok_or(ContentError::Empty { category })?;

        self.cache.put(category, &content);
        Ok(content)
    }

    fn resolve<T: Default>(
        &self,
        category: ContentCategory,
        result: Result<T, ContentError>,
        fallback: fn() -> T,
    ) -> T {
        match result {
            Ok(content) => content,
            Err(error) if self.config.use_fallback => {
                tracing::warn!(%category, %error, "serving fallback content");
                fallback()
            }
            Err(error) => {
                tracing::warn!(%category, %error, "content unavailable and fallback disabled");
                T::default()
            }
        }
    }
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}
