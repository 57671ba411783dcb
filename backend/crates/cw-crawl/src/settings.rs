use cw_config::CrawlConfig;

use std::time::Duration;

/// Crawl bounds as durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlSettings {
    pub navigation_timeout: Duration,
    pub link_wait: Duration,
    pub settle_delay: Duration,
    pub network_idle: Duration,
    pub session_timeout: Duration,
}

impl From<&CrawlConfig> for CrawlSettings {
    fn from(config: &CrawlConfig) -> Self {
        Self {
            navigation_timeout: Duration::from_secs(config.navigation_timeout_secs),
            link_wait: Duration::from_secs(config.link_wait_secs),
            settle_delay: Duration::from_millis(config.settle_delay_ms),
            network_idle: Duration::from_millis(config.network_idle_ms),
            session_timeout: Duration::from_secs(config.session_timeout_secs),
        }
    }
}

impl Default for CrawlSettings {
    fn default() -> Self {
        Self::from(&CrawlConfig::default())
    }
}
