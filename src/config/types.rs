use serde::Deserialize;

/// Directory the original site is served from
pub const DEFAULT_BASE_URL: &str = "https://www.paginasamarillas.com.uy";

/// Main configuration structure for the crawler
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub pages: PageRange,
    pub cache: CachePolicy,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Root of the directory site, without a trailing slash
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Accepted for compatibility; the crawl is always sequential
    #[serde(rename = "max-threads")]
    pub max_threads: u32,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: Option<String>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_threads: 1,
            user_agent: None,
        }
    }
}

/// A position in the category index: a letter and a page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub letter: char,
    /// `None` means unbounded (only meaningful for the end cursor)
    pub number: Option<u32>,
}

/// Range of category index pages to scan
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageRange {
    #[serde(rename = "start-letter")]
    pub start_letter: char,

    #[serde(rename = "start-page")]
    pub start_page: u32,

    #[serde(rename = "end-letter")]
    pub end_letter: char,

    /// Exclusive upper page bound; omitted means scan until a page adds nothing
    #[serde(rename = "end-page")]
    pub end_page: Option<u32>,
}

impl PageRange {
    pub fn start(&self) -> PageCursor {
        PageCursor {
            letter: self.start_letter,
            number: Some(self.start_page),
        }
    }

    pub fn end(&self) -> PageCursor {
        PageCursor {
            letter: self.end_letter,
            number: self.end_page,
        }
    }
}

impl Default for PageRange {
    fn default() -> Self {
        Self {
            start_letter: 'A',
            start_page: 1,
            end_letter: 'Z',
            end_page: None,
        }
    }
}

/// Per-artifact cache switches plus the output root
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CachePolicy {
    /// Reuse and write `categories.json`
    pub categories: bool,

    /// Reuse and write `publicationList/<category>.json`
    #[serde(rename = "publication-lists")]
    pub publication_lists: bool,

    /// Reuse and write `publications/<category>.json`
    pub publications: bool,

    /// Directory holding every cache file and `out.csv`; empty means the
    /// current working directory
    #[serde(rename = "out-path")]
    pub out_path: String,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            categories: true,
            publication_lists: true,
            publications: true,
            out_path: "./out".to_string(),
        }
    }
}
