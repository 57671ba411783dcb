use crate::{CrawlSettings, Navigator, Result, WaitPolicy};

use cw_core::{CredentialRecord, ExtractionRule};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use url::Url;

/// Reads a wallet page and turns its credential links into records.
///
/// Only the anchors present once the page has settled are considered; there
/// is no pagination or scrolling. An empty wallet is a successful empty
/// result.
pub struct CredentialExtractor {
    navigator: Arc<Navigator>,
    rule: ExtractionRule,
    wait: WaitPolicy,
    settle_delay: Duration,
}

impl CredentialExtractor {
    pub fn new(navigator: Arc<Navigator>, rule: ExtractionRule, settings: &CrawlSettings) -> Self {
        Self {
            navigator,
            rule,
            wait: WaitPolicy::network_idle(settings.network_idle, settings.navigation_timeout),
            settle_delay: settings.settle_delay,
        }
    }

    pub fn rule(&self) -> &ExtractionRule {
        &self.rule
    }

    pub async fn extract(&self, wallet_url: &Url) -> Result<Vec<CredentialRecord>> {
        let target = wallet_url.to_string();
        let wait = self.wait;
        let settle_delay = self.settle_delay;

        let anchors = self
            .navigator
            .with_session(move |page| {
                Box::pin(async move {
                    page.load(&target, wait).await?;
                    if !settle_delay.is_zero() {
                        tokio::time::sleep(settle_delay).await;
                    }
                    page.all_anchors().await
                })
            })
            .await?;

        debug!("Wallet {} has {} anchors", wallet_url, anchors.len());

        let records = self.rule.apply(&anchors);
        info!(
            "Extracted {} credentials from {}",
            records.len(),
            wallet_url
        );

        Ok(records)
    }
}
