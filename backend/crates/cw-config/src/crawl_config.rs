use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HEADLESS, DEFAULT_LINK_WAIT_SECS,
    DEFAULT_NAVIGATION_TIMEOUT_SECS, DEFAULT_NETWORK_IDLE_MS, DEFAULT_SESSION_TIMEOUT_SECS,
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_WEBDRIVER_URL, MAX_LINK_WAIT_SECS,
    MAX_NAVIGATION_TIMEOUT_SECS, MAX_NETWORK_IDLE_MS, MAX_SESSION_TIMEOUT_SECS,
    MAX_SETTLE_DELAY_MS, MIN_LINK_WAIT_SECS, MIN_NAVIGATION_TIMEOUT_SECS, MIN_NETWORK_IDLE_MS,
    MIN_SESSION_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Browser session and wait bounds for discovery and extraction.
///
/// Every wait the crawler performs is bounded by one of these values;
/// `session_timeout_secs` caps a whole browser session end to end.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// W3C WebDriver endpoint (chromedriver, geckodriver)
    pub webdriver_url: String,
    pub headless: bool,
    /// Upper bound for a page load including the network-idle wait
    pub navigation_timeout_secs: u64,
    /// How long discovery waits for the wallet marker link
    pub link_wait_secs: u64,
    /// Extra delay after network idle before reading wallet anchors
    pub settle_delay_ms: u64,
    /// Quiet period that counts as network idle
    pub network_idle_ms: u64,
    pub session_timeout_secs: u64,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            webdriver_url: String::from(DEFAULT_WEBDRIVER_URL),
            headless: DEFAULT_HEADLESS,
            navigation_timeout_secs: DEFAULT_NAVIGATION_TIMEOUT_SECS,
            link_wait_secs: DEFAULT_LINK_WAIT_SECS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            network_idle_ms: DEFAULT_NETWORK_IDLE_MS,
            session_timeout_secs: DEFAULT_SESSION_TIMEOUT_SECS,
        }
    }
}

impl CrawlConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let endpoint = self.webdriver_url.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::crawl(format!(
                "crawl.webdriver_url must be an http(s) URL, got '{}'",
                self.webdriver_url
            )));
        }

        if self.navigation_timeout_secs < MIN_NAVIGATION_TIMEOUT_SECS
            || self.navigation_timeout_secs > MAX_NAVIGATION_TIMEOUT_SECS
        {
            return Err(ConfigError::crawl(format!(
                "crawl.navigation_timeout_secs must be {}-{}, got {}",
                MIN_NAVIGATION_TIMEOUT_SECS,
                MAX_NAVIGATION_TIMEOUT_SECS,
                self.navigation_timeout_secs
            )));
        }

        if self.link_wait_secs < MIN_LINK_WAIT_SECS || self.link_wait_secs > MAX_LINK_WAIT_SECS {
            return Err(ConfigError::crawl(format!(
                "crawl.link_wait_secs must be {}-{}, got {}",
                MIN_LINK_WAIT_SECS, MAX_LINK_WAIT_SECS, self.link_wait_secs
            )));
        }

        if self.settle_delay_ms > MAX_SETTLE_DELAY_MS {
            return Err(ConfigError::crawl(format!(
                "crawl.settle_delay_ms must be 0-{}, got {}",
                MAX_SETTLE_DELAY_MS, self.settle_delay_ms
            )));
        }

        if self.network_idle_ms < MIN_NETWORK_IDLE_MS || self.network_idle_ms > MAX_NETWORK_IDLE_MS
        {
            return Err(ConfigError::crawl(format!(
                "crawl.network_idle_ms must be {}-{}, got {}",
                MIN_NETWORK_IDLE_MS, MAX_NETWORK_IDLE_MS, self.network_idle_ms
            )));
        }

        if self.session_timeout_secs < MIN_SESSION_TIMEOUT_SECS
            || self.session_timeout_secs > MAX_SESSION_TIMEOUT_SECS
        {
            return Err(ConfigError::crawl(format!(
                "crawl.session_timeout_secs must be {}-{}, got {}",
                MIN_SESSION_TIMEOUT_SECS, MAX_SESSION_TIMEOUT_SECS, self.session_timeout_secs
            )));
        }

        // A session must outlive the waits it contains: the page load, then
        // either the marker-link wait or the wallet settle delay
        let settle_secs = self.settle_delay_ms.div_ceil(1000);
        let inner_secs = self.navigation_timeout_secs + self.link_wait_secs.max(settle_secs);
        if self.session_timeout_secs < inner_secs {
            return Err(ConfigError::crawl(format!(
                "crawl.session_timeout_secs ({}) must be >= navigation_timeout_secs + \
                 max(link_wait_secs, settle_delay_ms rounded up to seconds) ({})",
                self.session_timeout_secs, inner_secs
            )));
        }

        Ok(())
    }
}
