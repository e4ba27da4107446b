//! On-disk cache for the three crawl stages
//!
//! This module handles persisting every intermediate artifact as JSON under
//! the output root:
//! - `categories.json`: the full category list
//! - `publicationList/<category>.json`: listing URLs of one category
//! - `publications/<category>.json`: extracted records of one category
//!
//! A file's presence is the only cache signal; there is no expiry and no
//! checksum. Category file names go through
//! [`cache_file_stem`](crate::normalize::cache_file_stem), so categories whose
//! names clean to the same stem share their cache files.

mod fs;
mod traits;

pub use fs::FsCache;
pub use traits::{CacheError, CacheResult, CacheStore};

/// File holding the category list
pub const CATEGORIES_FILE: &str = "categories.json";

/// Directory holding per-category publication URL lists
pub const PUBLICATION_LIST_DIR: &str = "publicationList";

/// Directory holding per-category publication records
pub const PUBLICATIONS_DIR: &str = "publications";
