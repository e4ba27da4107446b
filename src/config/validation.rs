use crate::config::types::{Config, CrawlerConfig, PageRange};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_page_range(&config.pages)?;
    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            config.base_url
        )));
    }

    if config.max_threads < 1 {
        return Err(ConfigError::Validation(format!(
            "max-threads must be >= 1, got {}",
            config.max_threads
        )));
    }

    if let Some(agent) = &config.user_agent {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(
                "user-agent cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates the category index page range
fn validate_page_range(range: &PageRange) -> Result<(), ConfigError> {
    for (key, letter) in [
        ("start-letter", range.start_letter),
        ("end-letter", range.end_letter),
    ] {
        if !letter.is_ascii_uppercase() {
            return Err(ConfigError::Validation(format!(
                "{} must be an uppercase ASCII letter, got '{}'",
                key, letter
            )));
        }
    }

    if range.start_letter > range.end_letter {
        return Err(ConfigError::Validation(format!(
            "start-letter '{}' comes after end-letter '{}'",
            range.start_letter, range.end_letter
        )));
    }

    if range.start_page < 1 {
        return Err(ConfigError::Validation(
            "start-page must be >= 1".to_string(),
        ));
    }

    if let Some(end) = range.end_page {
        if end <= range.start_page {
            return Err(ConfigError::Validation(format!(
                "end-page ({}) must be greater than start-page ({})",
                end, range.start_page
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = Config::default();
        config.crawler.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_non_http_base_url() {
        let mut config = Config::default();
        config.crawler.base_url = "ftp://example.com".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_zero_threads_rejected() {
        let mut config = Config::default();
        config.crawler.max_threads = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_many_threads_accepted() {
        let mut config = Config::default();
        config.crawler.max_threads = 16;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_blank_user_agent_rejected() {
        let mut config = Config::default();
        config.crawler.user_agent = Some("  ".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_lowercase_letter_rejected() {
        let mut config = Config::default();
        config.pages.start_letter = 'a';
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_reversed_letters_rejected() {
        let mut config = Config::default();
        config.pages.start_letter = 'M';
        config.pages.end_letter = 'C';
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_single_letter_range_accepted() {
        let mut config = Config::default();
        config.pages.start_letter = 'Q';
        config.pages.end_letter = 'Q';
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_zero_start_page_rejected() {
        let mut config = Config::default();
        config.pages.start_page = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_end_page_must_exceed_start() {
        let mut config = Config::default();
        config.pages.start_page = 3;
        config.pages.end_page = Some(3);
        assert!(validate(&config).is_err());

        config.pages.end_page = Some(4);
        assert!(validate(&config).is_ok());
    }
}
