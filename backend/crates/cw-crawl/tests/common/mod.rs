#![allow(dead_code)]

use cw_core::{DomainAllowlist, ExtractionRule};
use cw_crawl::testing::StaticSite;
use cw_crawl::{CrawlSettings, CredentialExtractor, Navigator, WalletDiscoverer};

use std::sync::Arc;
use std::time::Duration;

pub const CERT_URL: &str = "https://www.credential.net/3fa85f64-5717-4562-b3fc-2c963f66afa6";
pub const WALLET_URL: &str = "https://www.credential.net/profile/jdoe/wallet";

/// Bounds small enough to keep timeout tests fast
pub fn test_settings() -> CrawlSettings {
    CrawlSettings {
        navigation_timeout: Duration::from_secs(1),
        link_wait: Duration::from_millis(50),
        settle_delay: Duration::ZERO,
        network_idle: Duration::from_millis(10),
        session_timeout: Duration::from_millis(200),
    }
}

pub fn create_navigator(site: &StaticSite) -> Arc<Navigator> {
    Arc::new(Navigator::new(
        Arc::new(site.clone()),
        test_settings().session_timeout,
    ))
}

pub fn create_discoverer(site: &StaticSite) -> WalletDiscoverer {
    WalletDiscoverer::new(create_navigator(site), &test_settings())
}

pub fn create_extractor(site: &StaticSite) -> CredentialExtractor {
    let rule = ExtractionRule::new(DomainAllowlist::default()).expect("default rule");
    CredentialExtractor::new(create_navigator(site), rule, &test_settings())
}
