use crate::config::types::{
    CacheConfig, Config, CrawlerConfig, ExtractorConfig, FetcherConfig, RankingConfig,
    SeedsConfig, ServerConfig,
};
use crate::cache::MAX_TTL_SECS;
use crate::ConfigError;
use std::net::SocketAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_extractor_config(&config.extractor)?;
    validate_ranking_config(&config.ranking)?;
    validate_cache_config(&config.cache)?;
    validate_server_config(&config.server)?;
    validate_seeds_config(&config.seeds)?;
    Ok(())
}

/// Validates crawl budgets
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.max_pages < 1 || config.max_pages > 100 {
        return Err(ConfigError::Validation(format!(
            "max_pages must be between 1 and 100, got {}",
            config.max_pages
        )));
    }

    if config.crawl_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "crawl_timeout_ms must be >= 100ms, got {}ms",
            config.crawl_timeout_ms
        )));
    }

    if config.max_seed_fetches < 1 {
        return Err(ConfigError::Validation(format!(
            "max_seed_fetches must be >= 1, got {}",
            config.max_seed_fetches
        )));
    }

    Ok(())
}

/// Validates HTTP fetch settings
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_ms must be >= 100ms, got {}ms",
            config.request_timeout_ms
        )));
    }

    if config.max_redirects > 10 {
        return Err(ConfigError::Validation(format!(
            "max_redirects must be <= 10, got {}",
            config.max_redirects
        )));
    }

    Ok(())
}

/// Validates extraction thresholds
fn validate_extractor_config(config: &ExtractorConfig) -> Result<(), ConfigError> {
    if config.max_content_chars == 0 {
        return Err(ConfigError::Validation(
            "max_content_chars must be > 0".to_string(),
        ));
    }

    if config.min_content_chars > config.max_content_chars {
        return Err(ConfigError::Validation(format!(
            "min_content_chars ({}) cannot exceed max_content_chars ({})",
            config.min_content_chars, config.max_content_chars
        )));
    }

    Ok(())
}

/// Validates BM25 parameters
fn validate_ranking_config(config: &RankingConfig) -> Result<(), ConfigError> {
    if config.k1 <= 0.0 || !config.k1.is_finite() {
        return Err(ConfigError::Validation(format!(
            "k1 must be a positive number, got {}",
            config.k1
        )));
    }

    // NaN falls outside the range too
    if !(0.0..=1.0).contains(&config.b) {
        return Err(ConfigError::Validation(format!(
            "b must be between 0 and 1, got {}",
            config.b
        )));
    }

    Ok(())
}

/// Validates cache sizing
fn validate_cache_config(config: &CacheConfig) -> Result<(), ConfigError> {
    if config.capacity < 1 {
        return Err(ConfigError::Validation(format!(
            "cache capacity must be >= 1, got {}",
            config.capacity
        )));
    }

    if config.ttl_secs < 1 || config.ttl_secs > MAX_TTL_SECS {
        return Err(ConfigError::Validation(format!(
            "cache ttl_secs must be between 1 and {}, got {}",
            MAX_TTL_SECS, config.ttl_secs
        )));
    }

    Ok(())
}

/// Validates the HTTP endpoint settings
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind.parse::<SocketAddr>().map_err(|e| {
        ConfigError::Validation(format!("Invalid bind address '{}': {}", config.bind, e))
    })?;

    if config.max_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "max_limit must be >= 1, got {}",
            config.max_limit
        )));
    }

    if config.default_limit < 1 || config.default_limit > config.max_limit {
        return Err(ConfigError::Validation(format!(
            "default_limit must be between 1 and max_limit ({}), got {}",
            config.max_limit, config.default_limit
        )));
    }

    Ok(())
}

/// Validates the topic table and default seeds
fn validate_seeds_config(config: &SeedsConfig) -> Result<(), ConfigError> {
    if config.max_seeds < 1 {
        return Err(ConfigError::Validation(format!(
            "max_seeds must be >= 1, got {}",
            config.max_seeds
        )));
    }

    for topic in &config.topics {
        if topic.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Topic name cannot be empty".to_string(),
            ));
        }

        if topic.name != topic.name.to_lowercase() {
            return Err(ConfigError::Validation(format!(
                "Topic name '{}' must be lowercase",
                topic.name
            )));
        }

        if topic.urls.is_empty() {
            return Err(ConfigError::Validation(format!(
                "Topic '{}' must have at least one seed URL",
                topic.name
            )));
        }

        for seed in &topic.urls {
            validate_seed_url(seed)?;
        }
    }

    for seed in &config.defaults {
        validate_seed_url(seed)?;
    }

    Ok(())
}

/// Seeds must be absolute http(s) URLs with a host
fn validate_seed_url(seed: &str) -> Result<(), ConfigError> {
    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Seed URL '{}' must use http or https",
            seed
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' has no host",
            seed
        )));
    }

    Ok(())
}
