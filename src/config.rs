//! Upstream provider configuration

use std::time::Duration;

use crate::constants::{AVIATION_WEATHER_API_BASE, DATIS_API_BASE, REQUEST_TIMEOUT, USER_AGENT};

/// Connection settings for one upstream provider.
///
/// Read-only once a client is built from it, so clients holding it can be
/// cloned and shared freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base URL without a trailing slash (e.g. "https://aviationweather.gov/api")
    pub base_url: String,

    /// User-Agent header value
    pub user_agent: String,

    /// Total request timeout
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url.into()),
            user_agent: USER_AGENT.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Defaults for the aviationweather.gov data API
    pub fn aviation_weather() -> Self {
        Self::new(AVIATION_WEATHER_API_BASE)
    }

    /// Defaults for the FAA Digital ATIS API
    pub fn datis() -> Self {
        Self::new(DATIS_API_BASE)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = trim_base_url(url.into());
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the total timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let weather = ProviderConfig::aviation_weather();
        assert_eq!(weather.base_url, "https://aviationweather.gov/api");
        assert_eq!(weather.user_agent, "AviationWeatherMCP/1.0");
        assert_eq!(weather.timeout, Duration::from_secs(30));

        let atis = ProviderConfig::datis();
        assert_eq!(atis.base_url, "https://datis.clowd.io/api");
    }

    #[test]
    fn test_builder_strips_trailing_slashes() {
        let config = ProviderConfig::datis()
            .base_url("http://localhost:9000/api//")
            .timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
