//! Configuration module for the crawler
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so an empty file describes a full crawl of the
//! directory with all caches enabled.
//!
//! # Example
//!
//! ```no_run
//! use yellowpages_crawler::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("crawl.toml")).unwrap();
//! println!("Crawling {}", config.crawler.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CachePolicy, Config, CrawlerConfig, PageCursor, PageRange, DEFAULT_BASE_URL};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
