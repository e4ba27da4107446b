//! Crawler coordinator - main crawl orchestration logic
//!
//! The crawl runs three stages in order, never going back:
//! 1. Category discovery over the alphabetical index
//! 2. Publication URL discovery, per category
//! 3. Publication detail extraction, per category
//!
//! Every stage consults the cache first. Requests are issued one at a time.

use crate::cache::{CacheStore, FsCache};
use crate::config::Config;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::extract::{extract_category_links, extract_publication_links, extract_publication};
use crate::model::{Category, Publication};
use crate::output::write_csv;
use crate::CrawlError;
use reqwest::Client;
use std::collections::HashSet;
use std::path::PathBuf;

/// Name of the aggregated report under the output root
pub const REPORT_FILE: &str = "out.csv";

/// Counters describing a finished crawl
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Categories processed in stage 3
    pub categories: usize,

    /// Categories whose records came from the cache
    pub categories_from_cache: usize,

    /// Records written to the report
    pub publications: usize,

    /// Publication pages fetched and extracted
    pub pages_fetched: usize,

    /// Publication pages that could not be fetched
    pub pages_failed: usize,

    /// Where the CSV report was written
    pub report_path: PathBuf,
}

/// Main crawler coordinator structure
pub struct Coordinator<S: CacheStore = FsCache> {
    config: Config,
    client: Client,
    cache: S,
    report_path: PathBuf,
}

impl Coordinator<FsCache> {
    /// Creates a coordinator caching under the configured output root
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(CrawlError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, CrawlError> {
        let cache = FsCache::new(&config.cache.out_path);
        let report_path = cache.root().join(REPORT_FILE);
        Self::with_cache(config, cache, report_path)
    }
}

impl<S: CacheStore> Coordinator<S> {
    /// Creates a coordinator over any cache store
    pub fn with_cache(config: Config, cache: S, report_path: PathBuf) -> Result<Self, CrawlError> {
        let client = build_http_client(&config.crawler)?;

        if config.crawler.max_threads > 1 {
            tracing::debug!(
                "max-threads = {} has no effect, pages are fetched one at a time",
                config.crawler.max_threads
            );
        }

        Ok(Self {
            config,
            client,
            cache,
            report_path,
        })
    }

    /// Runs the three stages and writes the CSV report
    ///
    /// Only stage 1 cache failures and the report write abort the crawl;
    /// everything else is logged and skipped.
    pub async fn run(&mut self) -> Result<CrawlReport, CrawlError> {
        let categories = self.discover_categories().await?;
        tracing::info!("{} categories to crawl", categories.len());

        let mut report = CrawlReport {
            report_path: self.report_path.clone(),
            ..Default::default()
        };
        let mut visited: HashSet<String> = HashSet::new();
        let mut aggregate: Vec<Publication> = Vec::new();

        for category in &categories {
            tracing::info!(
                "Category: {}",
                category.short_name().unwrap_or(&category.name)
            );
            let publications = self
                .collect_publications(category, &mut visited, &mut report)
                .await;
            report.categories += 1;
            aggregate.extend(publications);
        }

        report.publications = aggregate.len();
        write_csv(&aggregate, &self.report_path)?;

        tracing::info!(
            "Crawl completed: {} categories ({} from cache), {} publications, {} pages fetched, {} failed",
            report.categories,
            report.categories_from_cache,
            report.publications,
            report.pages_fetched,
            report.pages_failed
        );

        Ok(report)
    }

    // ===== Stage 1: categories =====

    /// Returns the category list, from the cache when allowed
    pub async fn discover_categories(&self) -> Result<Vec<Category>, CrawlError> {
        let use_cache = self.config.cache.categories;

        if use_cache {
            self.cache.prepare()?;
            match self.cache.load_categories() {
                Ok(Some(categories)) if !categories.is_empty() => {
                    tracing::info!("Loaded {} categories from cache", categories.len());
                    return Ok(categories);
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Ignoring category cache: {}", e),
            }
        }

        let categories = self.scrape_categories().await;

        if use_cache {
            self.cache.save_categories(&categories)?;
        }

        Ok(categories)
    }

    /// Walks the index letter by letter
    ///
    /// A letter ends when a page fails to load or adds no category that was
    /// not already known.
    async fn scrape_categories(&self) -> Vec<Category> {
        let start = self.config.pages.start();
        let end = self.config.pages.end();
        let first_page = start.number.unwrap_or(1);
        let last_page = end.number.unwrap_or(u32::MAX);

        let mut categories = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for letter in start.letter..=end.letter {
            for number in first_page..last_page {
                let url = format!("{}/categorias/{}/{}", self.base_url(), letter, number);
                tracing::debug!("Fetching category index {}", url);

                let Some(body) = self.fetch_page(&url).await else {
                    break;
                };

                let before = categories.len();
                for category in extract_category_links(&body) {
                    if seen.insert(category.url.clone()) {
                        categories.push(category);
                    }
                }

                if categories.len() == before {
                    tracing::debug!("No new categories on {}, next letter", url);
                    break;
                }
            }
        }

        categories
    }

    // ===== Stage 2: publication URLs =====

    /// Returns the listing URLs of a category, from the cache when allowed
    pub async fn discover_publication_urls(&self, category: &Category) -> Vec<String> {
        let use_cache = self.config.cache.publication_lists;

        if use_cache {
            match self.cache.load_publication_urls(&category.name) {
                Ok(Some(urls)) if !urls.is_empty() => return urls,
                Ok(_) => {}
                Err(e) => tracing::warn!("Ignoring publication list cache: {}", e),
            }
        }

        let mut urls = Vec::new();
        for page in 1u32.. {
            let url = format!("{}/{}", self.absolute_url(&category.url), page);
            tracing::debug!("Fetching category page {}", url);

            let Some(body) = self.fetch_page(&url).await else {
                break;
            };
            urls.extend(extract_publication_links(&body));
        }

        if use_cache {
            if let Err(e) = self.cache.save_publication_urls(&category.name, &urls) {
                tracing::warn!("Failed to cache publication list of {}: {}", category.name, e);
            }
        }

        urls
    }

    // ===== Stage 3: publication details =====

    /// Returns the records of a category, from the cache when allowed
    ///
    /// URLs already in `visited` are not fetched again.
    pub async fn collect_publications(
        &self,
        category: &Category,
        visited: &mut HashSet<String>,
        report: &mut CrawlReport,
    ) -> Vec<Publication> {
        let use_cache = self.config.cache.publications;

        if use_cache {
            match self.cache.load_publications(&category.name) {
                Ok(Some(publications)) => {
                    report.categories_from_cache += 1;
                    return publications;
                }
                Ok(None) => {}
                Err(e) => tracing::warn!("Re-fetching {}: {}", category.name, e),
            }
        }

        let mut publications = Vec::new();
        for path in self.discover_publication_urls(category).await {
            if !visited.insert(path.clone()) {
                continue;
            }

            let url = self.absolute_url(&path);
            match self.fetch_page(&url).await {
                Some(body) => {
                    publications.push(extract_publication(&body, &url));
                    report.pages_fetched += 1;
                }
                None => {
                    tracing::warn!("Error getting the publication {}", url);
                    report.pages_failed += 1;
                }
            }
        }

        if use_cache && !publications.is_empty() {
            if let Err(e) = self.cache.save_publications(&category.name, &publications) {
                tracing::warn!("Failed to cache publications of {}: {}", category.name, e);
            }
        }

        publications
    }

    // ===== Helpers =====

    fn base_url(&self) -> &str {
        self.config.crawler.base_url.trim_end_matches('/')
    }

    /// Resolves a site-relative path against the base URL
    fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url(), path)
        }
    }

    /// Fetches a page, returning its body only on 200 OK
    async fn fetch_page(&self, url: &str) -> Option<String> {
        let result = fetch_url(&self.client, url).await;
        match &result {
            FetchResult::Success { .. } => {}
            FetchResult::HttpError { status_code } => {
                tracing::debug!("HTTP {} for {}", status_code, url);
            }
            FetchResult::NetworkError { error } => {
                tracing::debug!("Network error for {}: {}", url, error);
            }
        }
        result.into_body()
    }
}
