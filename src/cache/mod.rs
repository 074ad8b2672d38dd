//! Cache module for storing normalized content
//!
//! This module provides a cache store that persists content per category with
//! a configurable TTL in minutes. Expired, corrupt or unreadable entries are
//! treated as absent, so a cache problem never fails a content request.

mod manager;
mod storage;

pub use manager::CacheStore;
pub use storage::{CacheError, FileStorage, KeyValueStorage, MemoryStorage};
