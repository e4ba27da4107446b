//! Output generation for crawl results
//!
//! This module writes the aggregated CSV report, either at the end of a
//! crawl or rebuilt from the per-category publication cache.

mod report;

pub use report::{
    format_phones, format_timetable, publication_row, write_csv, CSV_HEADER, LIST_SEPARATOR,
};

use crate::cache::FsCache;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] crate::cache::CacheError),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Rebuilds the CSV report from every cached publication file
///
/// # Returns
///
/// * `Ok(usize)` - Number of records written
/// * `Err(OutputError)` - The cache could not be listed or the report written
pub fn export_cached_report(cache: &FsCache, output_path: &Path) -> OutputResult<usize> {
    let publications = cache.load_all_publications()?;
    write_csv(&publications, output_path)?;
    Ok(publications.len())
}
