use crate::error::{E2eError, Result};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Target site
    pub base_url: String,

    // Browser
    pub webdriver_url: String,
    pub headless: bool,
    pub accept_language: String,

    // Timeouts
    pub wait_timeout_ms: u64,
    pub settle_delay_ms: u64,
    pub poll_interval_ms: u64,

    // Test data
    pub search_data_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "https://www.bestprice.vn".to_string(),
            webdriver_url: "http://localhost:9515".to_string(),
            headless: true,
            accept_language: "vi-VN,vi;q=0.9".to_string(),
            wait_timeout_ms: 5000,
            settle_delay_ms: 500,
            poll_interval_ms: 100,
            search_data_path: "tests/data/search_flight.json".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Config::default();

        let config = Config {
            base_url: env::var("BASE_URL").unwrap_or(defaults.base_url),
            webdriver_url: env::var("WEBDRIVER_URL").unwrap_or(defaults.webdriver_url),
            headless: env::var("HEADLESS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.headless),
            accept_language: env::var("ACCEPT_LANGUAGE").unwrap_or(defaults.accept_language),

            wait_timeout_ms: env::var("WAIT_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.wait_timeout_ms),
            settle_delay_ms: env::var("SETTLE_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.settle_delay_ms),
            poll_interval_ms: env::var("POLL_INTERVAL_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.poll_interval_ms),

            search_data_path: env::var("SEARCH_DATA_PATH").unwrap_or(defaults.search_data_path),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(E2eError::Config(format!(
                "BASE_URL must be an http(s) URL: {}",
                self.base_url
            )));
        }
        if self.poll_interval_ms == 0 {
            return Err(E2eError::Config("POLL_INTERVAL_MS must be > 0".to_string()));
        }
        Ok(())
    }

    /// Absolute URLs pass through, anything else is joined onto `base_url`.
    pub fn resolve_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait_timeout_ms)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let config = Config::default();
        assert_eq!(config.resolve_url("/ve-may-bay"), "https://www.bestprice.vn/ve-may-bay");
        assert_eq!(config.resolve_url("ve-may-bay"), "https://www.bestprice.vn/ve-may-bay");
    }

    #[test]
    fn test_resolve_absolute_url() {
        let config = Config {
            base_url: "http://127.0.0.1:3000/".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_url("https://www.bestprice.vn/ve-may-bay"),
            "https://www.bestprice.vn/ve-may-bay"
        );
        assert_eq!(config.resolve_url("/ve-may-bay"), "http://127.0.0.1:3000/ve-may-bay");
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = Config {
            base_url: "bestprice.vn".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(E2eError::Config(_))));
        assert!(Config::default().validate().is_ok());
    }
}
