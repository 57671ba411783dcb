use crate::{CrawlError, CrawlSettings, Navigator, Result, WaitPolicy};

use cw_core::links::resolve_against_origin;

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use url::Url;

/// Anchor on a certificate page that links to the owner's wallet
pub const WALLET_LINK_SELECTOR: &str = r#"a[data-cy="view-all-credentials-link"]"#;

/// Finds the public wallet linked from a single certificate page.
pub struct WalletDiscoverer {
    navigator: Arc<Navigator>,
    wait: WaitPolicy,
    link_wait: Duration,
}

impl WalletDiscoverer {
    pub fn new(navigator: Arc<Navigator>, settings: &CrawlSettings) -> Self {
        Self {
            navigator,
            wait: WaitPolicy::network_idle(settings.network_idle, settings.navigation_timeout),
            link_wait: settings.link_wait,
        }
    }

    /// Load `cert_url` and return the absolute wallet URL its marker link
    /// points to. A missing link, or one without an href, is
    /// [`CrawlError::LinkNotFound`].
    pub async fn discover(&self, cert_url: &Url) -> Result<String> {
        let target = cert_url.to_string();
        let wait = self.wait;
        let link_wait = self.link_wait;

        let href = self
            .navigator
            .with_session(move |page| {
                Box::pin(async move {
                    page.load(&target, wait).await?;
                    page.find_attribute(WALLET_LINK_SELECTOR, "href", link_wait)
                        .await
                })
            })
            .await?;

        let href = match href {
            Some(href) if !href.trim().is_empty() => href,
            _ => {
                warn!("Wallet link not found on {}", cert_url);
                return Err(CrawlError::link_not_found(cert_url.as_str()));
            }
        };

        let wallet_url = resolve_against_origin(cert_url, &href)?;
        info!("Discovered wallet {} from {}", wallet_url, cert_url);

        Ok(wallet_url)
    }
}
