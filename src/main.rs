//! Yellowpages-Crawler main entry point
//!
//! This is the command-line interface for the business-directory crawler.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use yellowpages_crawler::cache::FsCache;
use yellowpages_crawler::config::{load_config_with_hash, Config};
use yellowpages_crawler::crawler::{crawl, REPORT_FILE};
use yellowpages_crawler::output::export_cached_report;

/// Yellowpages-Crawler: a business-directory harvester
///
/// Crawls the directory's category index, every category's listings and
/// every listing page, caching each stage as JSON and writing one CSV.
#[derive(Parser, Debug)]
#[command(name = "yellowpages-crawler")]
#[command(version)]
#[command(about = "A business-directory harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the output root from the configuration
    #[arg(short, long, value_name = "DIR")]
    out: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with = "export_csv")]
    dry_run: bool,

    /// Rebuild out.csv from the cached publications and exit
    #[arg(long, conflicts_with = "dry_run")]
    export_csv: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(out) = cli.out {
        config.cache.out_path = out;
    }

    let result = if cli.dry_run {
        handle_dry_run(&config);
        Ok(())
    } else if cli.export_csv {
        handle_export_csv(&config)
    } else {
        handle_crawl(config).await
    };

    tracing::info!("Finish");
    result
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("yellowpages_crawler=info,warn"),
            1 => EnvFilter::new("yellowpages_crawler=debug,info"),
            2 => EnvFilter::new("yellowpages_crawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the resolved configuration
fn handle_dry_run(config: &Config) {
    let start = config.pages.start();
    let end = config.pages.end();

    println!("=== Yellowpages-Crawler Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Base URL: {}", config.crawler.base_url);
    println!("  Max threads: {} (requests are sequential)", config.crawler.max_threads);
    if let Some(agent) = &config.crawler.user_agent {
        println!("  User agent: {}", agent);
    }

    println!("\nCategory Index:");
    println!(
        "  From: {}/{}",
        start.letter,
        start.number.unwrap_or(1)
    );
    match end.number {
        Some(number) => println!("  To: {}/{} (exclusive)", end.letter, number),
        None => println!("  To: {}/unbounded", end.letter),
    }

    println!("\nCache:");
    println!("  Output root: {}", FsCache::new(&config.cache.out_path).root().display());
    println!("  Categories: {}", config.cache.categories);
    println!("  Publication lists: {}", config.cache.publication_lists);
    println!("  Publications: {}", config.cache.publications);

    println!("\n✓ Configuration is valid");
}

/// Handles the --export-csv mode: rebuilds the report from cached records
fn handle_export_csv(config: &Config) -> anyhow::Result<()> {
    let cache = FsCache::new(&config.cache.out_path);
    let path = cache.root().join(REPORT_FILE);

    let written = export_cached_report(&cache, &path)
        .with_context(|| format!("Failed to export {}", path.display()))?;

    println!("✓ {} publications exported to: {}", written, path.display());
    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    tracing::info!(
        "Crawling {} from {}/{} to {}",
        config.crawler.base_url,
        config.pages.start_letter,
        config.pages.start_page,
        config.pages.end_letter
    );

    let report = crawl(config).await?;
    tracing::info!("Report written to {}", report.report_path.display());
    Ok(())
}
