//! Cache store trait and error types
//!
//! This module defines the interface the crawler uses to look up and
//! persist stage artifacts, along with its error type.

use crate::model::{Category, Publication};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed cache file {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Cache root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
}

/// Result type for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Storage for the artifacts of each crawl stage
///
/// `load_*` returns `Ok(None)` when nothing is cached and an error when a
/// cached artifact exists but cannot be read. Per-category artifacts are
/// keyed by the category name.
pub trait CacheStore {
    /// Makes sure the store can be written to
    fn prepare(&self) -> CacheResult<()>;

    // ===== Category list =====

    /// Loads the cached category list
    fn load_categories(&self) -> CacheResult<Option<Vec<Category>>>;

    /// Persists the full category list
    fn save_categories(&self, categories: &[Category]) -> CacheResult<()>;

    // ===== Publication URL lists =====

    /// Loads the cached listing URLs of a category
    fn load_publication_urls(&self, category_name: &str) -> CacheResult<Option<Vec<String>>>;

    /// Persists the listing URLs of a category
    fn save_publication_urls(&self, category_name: &str, urls: &[String]) -> CacheResult<()>;

    // ===== Publication records =====

    /// Loads the cached records of a category
    fn load_publications(&self, category_name: &str) -> CacheResult<Option<Vec<Publication>>>;

    /// Persists the records of a category
    fn save_publications(
        &self,
        category_name: &str,
        publications: &[Publication],
    ) -> CacheResult<()>;
}
