//! Bubble Search main entry point
//!
//! Runs the search HTTP server, or a single query from the command line.

use anyhow::Context;
use bubble_search::config::{load_config_with_hash, validate, Config};
use bubble_search::search::SearchEngine;
use bubble_search::seeds::SeedGenerator;
use bubble_search::server::{serve, SearchResponse};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Bubble Search: a per-query web micro-crawler
///
/// For every query, crawls a few topic-relevant sites within a strict time
/// budget, indexes what it fetched and returns BM25-ranked results.
#[derive(Parser, Debug)]
#[command(name = "bubble-search")]
#[command(version = "1.0.0")]
#[command(about = "A per-query web micro-crawler with in-memory ranking", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults if omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the server bind address
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Run one search, print the JSON response and exit
    #[arg(long, value_name = "QUERY", conflicts_with = "dry_run")]
    query: Option<String>,

    /// Result count for --query
    #[arg(long, requires = "query")]
    limit: Option<usize>,

    /// Validate config and show the seeds a query would use, without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
        validate(&config).context("Invalid --bind address")?;
    }

    if cli.dry_run {
        handle_dry_run(&config);
    } else if let Some(query) = cli.query {
        handle_query(&config, &query, cli.limit).await?;
    } else {
        serve(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bubble_search=info,warn"),
            1 => EnvFilter::new("bubble_search=debug,tower_http=debug,info"),
            2 => EnvFilter::new("bubble_search=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        let config = Config::default();
        validate(&config)?;
        return Ok(config);
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles --dry-run: prints the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Bubble Search Dry Run ===\n");

    println!("Crawl budget:");
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Max pages: {}", config.crawler.max_pages);
    println!("  Deadline: {}ms", config.crawler.crawl_timeout_ms);
    println!("  Seeds fetched per query: {}", config.crawler.max_seed_fetches);

    println!("\nFetcher:");
    println!("  Request timeout: {}ms", config.fetcher.request_timeout_ms);
    println!("  Max redirects: {}", config.fetcher.max_redirects);

    println!("\nCache: {} queries for {}s", config.cache.capacity, config.cache.ttl_secs);
    println!(
        "Server: {} (default limit {}, max {})",
        config.server.bind, config.server.default_limit, config.server.max_limit
    );

    println!("\nTopics ({}):", config.seeds.topics.len());
    for topic in &config.seeds.topics {
        println!("  - {} ({} seeds)", topic.name, topic.urls.len());
    }

    let generator = SeedGenerator::new(&config.seeds);
    println!("\nSample seeds for \"javascript tutorial\":");
    for seed in generator.generate("javascript tutorial") {
        println!("  * {}", seed);
    }

    println!("\n✓ Configuration is valid");
}

/// Handles --query: one search, JSON on stdout
async fn handle_query(config: &Config, query: &str, limit: Option<usize>) -> anyhow::Result<()> {
    let engine = SearchEngine::from_config(config)?;
    let limit = limit.unwrap_or(engine.default_limit());

    let results = engine.search(query, limit).await?;
    let response = SearchResponse::new(query.trim().to_string(), results);

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
