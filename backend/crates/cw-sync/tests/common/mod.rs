#![allow(dead_code)]

use cw_core::{DomainAllowlist, ExtractionRule};
use cw_crawl::CrawlSettings;
use cw_crawl::testing::StaticSite;
use cw_db::{CredentialStore, MemoryStore, SqliteStore, open_memory_pool};
use cw_sync::SyncCoordinator;

use std::sync::Arc;
use std::time::Duration;

pub const USER: &str = "user-1";
pub const CERT_URL: &str = "https://www.credential.net/3fa85f64-5717-4562-b3fc-2c963f66afa6";
pub const WALLET_URL: &str = "https://www.credential.net/profile/jdoe/wallet";
pub const CRED_A: &str = "https://www.credential.net/3fa85f64-5717-4562-b3fc-2c963f66afa6";
pub const CRED_B: &str = "https://verify.accredible.com/0f9e8d7c-6b5a-4938-8271-605f4e3d2c1b";

pub fn test_settings() -> CrawlSettings {
    CrawlSettings {
        navigation_timeout: Duration::from_secs(1),
        link_wait: Duration::from_millis(50),
        settle_delay: Duration::ZERO,
        network_idle: Duration::from_millis(10),
        session_timeout: Duration::from_millis(200),
    }
}

pub fn create_coordinator(site: &StaticSite, store: Arc<dyn CredentialStore>) -> SyncCoordinator {
    let rule = ExtractionRule::new(DomainAllowlist::default()).expect("default rule");
    SyncCoordinator::with_launcher(Arc::new(site.clone()), &test_settings(), rule, store)
}

pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

pub async fn sqlite_store() -> Arc<SqliteStore> {
    let pool = open_memory_pool().await.expect("Failed to create test pool");
    Arc::new(SqliteStore::new(pool))
}
