//! Command-line interface parsing for the allhat content client
//!
//! This module handles parsing of CLI arguments using clap and turns them
//! into a validated [`StartupConfig`] for the content service.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::config::ContentConfig;
use crate::content::ContentCategory;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The specified category name is not recognized
    #[error("Invalid category: '{0}'. Valid categories: designs, silhouettes, about, home, all")]
    InvalidCategory(String),

    /// The base URL is not an http(s) URL
    #[error("Invalid base URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// A zero timeout would fail every request
    #[error("Invalid timeout: must be greater than 0 ms")]
    ZeroTimeout,
}

/// All Hat and No Cattle content client
#[derive(Parser, Debug)]
#[command(name = "allhat")]
#[command(about = "Fetch site content from WordPress with caching and static fallbacks")]
#[command(version)]
pub struct Cli {
    /// Content to fetch: designs, silhouettes, about, home or all
    #[arg(default_value = "all", value_name = "CATEGORY")]
    pub category: String,

    /// WordPress REST base URL (e.g. https://example.com/wp-json/wp/v2)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Minutes before cached content expires
    #[arg(long, value_name = "MINUTES")]
    pub cache_ttl_minutes: Option<u64>,

    /// Do not read or write the content cache
    #[arg(long)]
    pub no_cache: bool,

    /// Do not ask WordPress to embed featured media
    #[arg(long)]
    pub no_embed: bool,

    /// Return empty content instead of built-in content when WordPress is unavailable
    #[arg(long)]
    pub no_fallback: bool,

    /// Directory for cache files (defaults to the user cache directory)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Remove all cached content before fetching
    #[arg(long)]
    pub clear_cache: bool,
}

/// Which content the CLI should fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    One(ContentCategory),
    All,
}

/// Parses a category argument into a [`Selection`]
pub fn parse_category_arg(s: &str) -> Result<Selection, CliError> {
    match s.trim().to_lowercase().as_str() {
        "designs" | "design" => Ok(Selection::One(ContentCategory::Designs)),
        "silhouettes" | "silhouette" | "outfits" => Ok(Selection::One(ContentCategory::Silhouettes)),
        "about" => Ok(Selection::One(ContentCategory::AboutPage)),
        "home" => Ok(Selection::One(ContentCategory::HomePage)),
        "all" => Ok(Selection::All),
        _ => Err(CliError::InvalidCategory(s.to_string())),
    }
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub selection: Selection,
    pub content: ContentConfig,
    /// Overrides the default cache directory
    pub cache_dir: Option<PathBuf>,
    pub clear_cache: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            selection: Selection::All,
            content: ContentConfig::default(),
            cache_dir: None,
            clear_cache: false,
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with CLI overrides applied over the defaults
    /// * `Err(CliError)` if the category, base URL or timeout is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let selection = parse_category_arg(&cli.category)?;
        let mut content = ContentConfig::default();

        if let Some(base_url) = &cli.base_url {
            if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
                return Err(CliError::InvalidBaseUrl(base_url.clone()));
            }
            content.base_url = base_url.clone();
        }

        if let Some(timeout_ms) = cli.timeout_ms {
            if timeout_ms == 0 {
                return Err(CliError::ZeroTimeout);
            }
            content.request_timeout = Duration::from_millis(timeout_ms);
        }

        if let Some(minutes) = cli.cache_ttl_minutes {
            content.cache.expiration_minutes = minutes;
        }

        content.cache.enabled = !cli.no_cache;
        content.embed_media = !cli.no_embed;
        content.use_fallback = !cli.no_fallback;

        Ok(StartupConfig {
            selection,
            content,
            cache_dir: cli.cache_dir.clone(),
            clear_cache: cli.clear_cache,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_arg_names() {
        assert_eq!(
            parse_category_arg("designs").unwrap(),
            Selection::One(ContentCategory::Designs)
        );
        assert_eq!(
            parse_category_arg("silhouettes").unwrap(),
            Selection::One(ContentCategory::Silhouettes)
        );
        assert_eq!(
            parse_category_arg("about").unwrap(),
            Selection::One(ContentCategory::AboutPage)
        );
        assert_eq!(
            parse_category_arg("home").unwrap(),
            Selection::One(ContentCategory::HomePage)
        );
        assert_eq!(parse_category_arg("all").unwrap(), Selection::All);
    }

    #[test]
    fn test_parse_category_arg_aliases() {
        assert_eq!(
            parse_category_arg("outfits").unwrap(),
            Selection::One(ContentCategory::Silhouettes)
        );
        assert_eq!(
            parse_category_arg("Design").unwrap(),
            Selection::One(ContentCategory::Designs)
        );
    }

    #[test]
    fn test_parse_category_arg_invalid() {
        let err = parse_category_arg("hats").unwrap_err();
        assert!(err.to_string().contains("Invalid category"));
        assert!(err.to_string().contains("hats"));
    }

    #[test]
    fn test_cli_parse_no_args_defaults_to_all() {
        let cli = Cli::parse_from(["allhat"]);
        assert_eq!(cli.category, "all");
        assert!(!cli.no_cache);

        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config.selection, Selection::All);
        assert_eq!(config.content, ContentConfig::default());
        assert!(config.cache_dir.is_none());
        assert!(!config.clear_cache);
    }

    #[test]
    fn test_startup_config_applies_overrides() {
        let cli = Cli::parse_from([
            "allhat",
            "home",
            "--base-url",
            "http://localhost:8080/wp-json/wp/v2",
            "--timeout-ms",
            "250",
            "--cache-ttl-minutes",
            "5",
            "--no-embed",
            "--no-fallback",
            "--cache-dir",
            "/tmp/allhat-cache",
            "--clear-cache",
        ]);

        let config = StartupConfig::from_cli(&cli).unwrap();

        assert_eq!(config.selection, Selection::One(ContentCategory::HomePage));
        assert_eq!(config.content.base_url, "http://localhost:8080/wp-json/wp/v2");
        assert_eq!(config.content.request_timeout, Duration::from_millis(250));
        assert_eq!(config.content.cache.expiration_minutes, 5);
        assert!(config.content.cache.enabled);
        assert!(!config.content.embed_media);
        assert!(!config.content.use_fallback);
        assert_eq!(config.cache_dir, Some(PathBuf::from("/tmp/allhat-cache")));
        assert!(config.clear_cache);
    }

    #[test]
    fn test_no_cache_disables_cache() {
        let cli = Cli::parse_from(["allhat", "--no-cache"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert!(!config.content.cache.enabled);
    }

    #[test]
    fn test_startup_config_rejects_bad_base_url() {
        let cli = Cli::parse_from(["allhat", "--base-url", "ftp://example.com"]);
        assert!(matches!(
            StartupConfig::from_cli(&cli),
            Err(CliError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_startup_config_rejects_zero_timeout() {
        let cli = Cli::parse_from(["allhat", "--timeout-ms", "0"]);
        assert!(matches!(
            StartupConfig::from_cli(&cli),
            Err(CliError::ZeroTimeout)
        ));
    }

    #[test]
    fn test_startup_config_rejects_invalid_category() {
        let cli = Cli::parse_from(["allhat", "invalid"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
