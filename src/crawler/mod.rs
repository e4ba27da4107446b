//! Crawler module for directory page fetching and processing
//!
//! This module contains the crawl pipeline:
//! - HTTP fetching (one request at a time, no retry)
//! - The three-stage coordinator (categories, listing URLs, details)

mod coordinator;
mod fetcher;

pub use coordinator::{Coordinator, CrawlReport, REPORT_FILE};
pub use fetcher::{build_http_client, fetch_url, FetchResult, DEFAULT_USER_AGENT};

use crate::config::Config;
use crate::CrawlError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Load or scrape the category list
/// 2. Load or scrape each category's listing URLs
/// 3. Load or fetch each category's publications
/// 4. Write the aggregated CSV report
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed
/// * `Err(CrawlError)` - Crawl aborted
pub async fn crawl(config: Config) -> Result<CrawlReport, CrawlError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
