use crate::validation::{
    CERT_URL_FIELD, WALLET_URL_FIELD, require_allowed_url, require_user_id,
};
use crate::{Result, SyncError};

use cw_core::{
    Credential, CredentialRecord, DomainAllowlist, ExternalProfile, ExtractionRule, ImportReport,
    ProfileUpsert, SyncReport,
};
use cw_crawl::{CrawlSettings, CredentialExtractor, Navigator, SessionLauncher, WalletDiscoverer};
use cw_db::CredentialStore;

use std::sync::Arc;

use chrono::Utc;
use log::{error, info};
use url::Url;

/// Runs the discover, sync and full-import workflows against a store.
///
/// Inputs are validated before any session is opened or row written. Each
/// discovery or extraction uses its own browser session.
pub struct SyncCoordinator {
    discoverer: WalletDiscoverer,
    extractor: CredentialExtractor,
    store: Arc<dyn CredentialStore>,
    domains: DomainAllowlist,
}

impl SyncCoordinator {
    pub fn new(
        discoverer: WalletDiscoverer,
        extractor: CredentialExtractor,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        let domains = extractor.rule().domains().clone();
        Self {
            discoverer,
            extractor,
            store,
            domains,
        }
    }

    /// Wire a coordinator whose discoverer and extractor share one launcher
    pub fn with_launcher(
        launcher: Arc<dyn SessionLauncher>,
        settings: &CrawlSettings,
        rule: ExtractionRule,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        let navigator = Arc::new(Navigator::new(launcher, settings.session_timeout));
        let discoverer = WalletDiscoverer::new(navigator.clone(), settings);
        let extractor = CredentialExtractor::new(navigator, rule, settings);
        Self::new(discoverer, extractor, store)
    }

    /// Find the wallet linked from a certificate page. Nothing is persisted.
    pub async fn discover(&self, user_id: &str, cert_url: &str) -> Result<String> {
        let user_id = require_user_id(user_id)?;
        let cert = require_allowed_url(cert_url, CERT_URL_FIELD, &self.domains)?;

        let wallet = self.discover_wallet(user_id, &cert).await?;
        Ok(wallet.into())
    }

    /// Upsert the profile, extract the wallet and insert unseen credentials.
    pub async fn sync(
        &self,
        user_id: &str,
        wallet_url: &str,
        auto_sync: bool,
    ) -> Result<SyncReport> {
        let user_id = require_user_id(user_id)?;
        let wallet = require_allowed_url(wallet_url, WALLET_URL_FIELD, &self.domains)?;

        self.sync_wallet(user_id, &wallet, auto_sync).await
    }

    /// Discover the wallet behind `cert_url`, then sync it with auto-sync off.
    pub async fn full_import(&self, user_id: &str, cert_url: &str) -> Result<ImportReport> {
        let user_id = require_user_id(user_id)?;
        let cert = require_allowed_url(cert_url, CERT_URL_FIELD, &self.domains)?;

        let wallet = self.discover_wallet(user_id, &cert).await?;
        let report = self.sync_wallet(user_id, &wallet, false).await?;

        Ok(ImportReport {
            wallet_url: wallet.into(),
            records: report.records,
        })
    }

    /// Stored credentials of a user, oldest first
    pub async fn credentials_for_user(&self, user_id: &str) -> Result<Vec<Credential>> {
        let user_id = require_user_id(user_id)?;
        Ok(self.store.credentials_for_user(user_id).await?)
    }

    /// Most recently synced profile of a user
    pub async fn profile_for_user(&self, user_id: &str) -> Result<Option<ExternalProfile>> {
        let user_id = require_user_id(user_id)?;
        Ok(self.store.profile_for_user(user_id).await?)
    }

    /// Turn auto-sync on or off for every profile of a user
    pub async fn set_auto_sync(&self, user_id: &str, enable: bool) -> Result<u64> {
        let user_id = require_user_id(user_id)?;
        let updated = self.store.set_auto_sync(user_id, enable).await?;
        info!(
            "Auto-sync {} for user {} ({} profiles)",
            if enable { "enabled" } else { "disabled" },
            user_id,
            updated
        );
        Ok(updated)
    }

    /// Discovered wallet URL, held to the same domain rule as the certificate
    async fn discover_wallet(&self, user_id: &str, cert: &Url) -> Result<Url> {
        info!("Discovering wallet for user {} from {}", user_id, cert);

        let wallet_url = self
            .discoverer
            .discover(cert)
            .await
            .inspect_err(|e| error!("Discovery failed for {}: {}", cert, e))?;

        require_allowed_url(&wallet_url, WALLET_URL_FIELD, &self.domains)
            .inspect_err(|e| error!("Wallet link on {} leaves the allowed domains: {}", cert, e))
            .map_err(SyncError::from)
    }

    async fn sync_wallet(
        &self,
        user_id: &str,
        wallet: &Url,
        auto_sync: bool,
    ) -> Result<SyncReport> {
        let wallet_url = wallet.as_str();

        self.store
            .upsert_profile(&ProfileUpsert::new(user_id, wallet_url, auto_sync, Utc::now()))
            .await?;

        let records = self
            .extractor
            .extract(wallet)
            .await
            .inspect_err(|e| error!("Extraction failed for {}: {}", wallet_url, e))?;

        let new_imported = self.store_records(user_id, &records).await?;

        info!(
            "Synced {} for user {}: {} found, {} new",
            wallet_url,
            user_id,
            records.len(),
            new_imported
        );

        Ok(SyncReport {
            total_found: records.len(),
            new_imported,
            records,
        })
    }

    async fn store_records(&self, user_id: &str, records: &[CredentialRecord]) -> Result<usize> {
        let now = Utc::now();
        let mut inserted = 0;

        for record in records {
            let rows = self
                .store
                .insert_credential(user_id, record, now)
                .await
                .inspect_err(|e| {
                    error!(
                        "Failed to store credential {} for {}: {}",
                        record.credential_uuid, user_id, e
                    )
                })?;
            inserted += rows as usize;
        }

        Ok(inserted)
    }
}
