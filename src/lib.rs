//! All Hat and No Cattle content client library
//!
//! Fetches site content from the WordPress REST API, caches it per category
//! and falls back to built-in content whenever the CMS is unavailable.

pub mod cache;
pub mod cli;
pub mod config;
pub mod content;
