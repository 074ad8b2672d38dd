//! allhat - fetch All Hat and No Cattle site content
//!
//! Prints normalized content for one category, or all of them, as JSON.
//! Content comes from the cache, the WordPress API, or built-in fallbacks.

use std::io;
use std::sync::Arc;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use allhat::cache::{CacheStore, FileStorage};
use allhat::cli::{Cli, Selection, StartupConfig};
use allhat::content::{
    AboutContent, ContentCategory, ContentService, DesignItem, HomeContent, SilhouetteItem,
};

/// Every category at once, as printed by `allhat all`
#[derive(Debug, Serialize)]
struct SiteContent {
    designs: Vec<DesignItem>,
    silhouettes: Vec<SilhouetteItem>,
    about: AboutContent,
    home: HomeContent,
}

/// Sends logs to stderr so stdout stays valid JSON
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("allhat=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Opens the cache store selected by the startup config
///
/// Falls back to an in-memory store when no cache directory is available.
fn open_cache(config: &StartupConfig) -> CacheStore {
    let settings = config.content.cache;
    if let Some(dir) = &config.cache_dir {
        return CacheStore::new(Arc::new(FileStorage::with_dir(dir.clone())), settings);
    }

    CacheStore::open_default(settings).unwrap_or_else(|| {
        tracing::warn!("no cache directory available, caching in memory only");
        CacheStore::in_memory(settings)
    })
}

/// Fetches the selected content and renders it as pretty JSON
async fn render(service: &ContentService, selection: Selection) -> serde_json::Result<String> {
    match selection {
        Selection::One(ContentCategory::Designs) => {
            serde_json::to_string_pretty(&service.fetch_designs().await)
        }
        Selection::One(ContentCategory::Silhouettes) => {
            serde_json::to_string_pretty(&service.fetch_silhouettes().await)
        }
        Selection::One(ContentCategory::AboutPage) => {
            serde_json::to_string_pretty(&service.fetch_about_content().await)
        }
        Selection::One(ContentCategory::HomePage) => {
            serde_json::to_string_pretty(&service.fetch_home_content().await)
        }
        Selection::All => {
            let (designs, silhouettes, about, home) = futures::join!(
                service.fetch_designs(),
                service.fetch_silhouettes(),
                service.fetch_about_content(),
                service.fetch_home_content(),
            );
            serde_json::to_string_pretty(&SiteContent {
                designs,
                silhouettes,
                about,
                home,
            })
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    };

    init_tracing();

    let cache = open_cache(&config);
    if config.clear_cache {
        cache.clear();
        tracing::info!("cleared cached content");
    }

    let service = ContentService::with_http(cache, config.content.clone());
    let output = render(&service, config.selection).await?;
    println!("{}", output);

    Ok(())
}
