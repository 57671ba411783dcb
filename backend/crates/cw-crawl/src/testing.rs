//! In-process stand-in for a browser, for tests that exercise discovery,
//! extraction and sync without a WebDriver endpoint.

use crate::{
    CrawlError, PageSession, Result, SessionLauncher, WALLET_LINK_SELECTOR, WaitPolicy,
};

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
enum LoadBehavior {
    #[default]
    Ok,
    Fail(String),
    Hang,
}

/// Static content served for one URL
#[derive(Debug, Clone, Default)]
pub struct FakePage {
    anchors: Vec<String>,
    elements: HashMap<String, HashMap<String, String>>,
    behavior: LoadBehavior,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page whose anchors resolve to `hrefs`
    pub fn with_anchors<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            anchors: hrefs.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Certificate page carrying the wallet marker link
    pub fn with_wallet_link(href: &str) -> Self {
        Self::new().element(WALLET_LINK_SELECTOR, "href", href)
    }

    /// Load fails with a navigation error
    pub fn failing(message: &str) -> Self {
        Self {
            behavior: LoadBehavior::Fail(message.to_string()),
            ..Self::default()
        }
    }

    /// Load never completes
    pub fn hanging() -> Self {
        Self {
            behavior: LoadBehavior::Hang,
            ..Self::default()
        }
    }

    pub fn element(mut self, selector: &str, attribute: &str, value: &str) -> Self {
        self.elements
            .entry(selector.to_string())
            .or_default()
            .insert(attribute.to_string(), value.to_string());
        self
    }

    /// Element present but without any attributes
    pub fn bare_element(mut self, selector: &str) -> Self {
        self.elements.entry(selector.to_string()).or_default();
        self
    }
}

#[derive(Debug, Default)]
struct Counters {
    launched: AtomicUsize,
    released: AtomicUsize,
    fail_launch: AtomicBool,
    fail_release: AtomicBool,
    hang_launch: AtomicBool,
    hang_release: AtomicBool,
}

/// [`SessionLauncher`] serving fixed pages by exact URL
#[derive(Debug, Clone, Default)]
pub struct StaticSite {
    pages: Arc<RwLock<HashMap<String, FakePage>>>,
    counters: Arc<Counters>,
}

impl StaticSite {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_page(&self, url: &str, page: FakePage) {
        self.pages.write().await.insert(url.to_string(), page);
    }

    pub fn fail_launch(&self, fail: bool) {
        self.counters.fail_launch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_release(&self, fail: bool) {
        self.counters.fail_release.store(fail, Ordering::SeqCst);
    }

    /// Launch never completes
    pub fn hang_launch(&self, hang: bool) {
        self.counters.hang_launch.store(hang, Ordering::SeqCst);
    }

    /// Release never completes
    pub fn hang_release(&self, hang: bool) {
        self.counters.hang_release.store(hang, Ordering::SeqCst);
    }

    pub fn launched(&self) -> usize {
        self.counters.launched.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.counters.released.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionLauncher for StaticSite {
    async fn launch(&self) -> Result<Box<dyn PageSession>> {
        if self.counters.fail_launch.load(Ordering::SeqCst) {
            return Err(CrawlError::session("browser failed to start"));
        }
        if self.counters.hang_launch.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }

        self.counters.launched.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(StaticSession {
            site: self.clone(),
            current: None,
        }))
    }
}

struct StaticSession {
    site: StaticSite,
    current: Option<FakePage>,
}

#[async_trait]
impl PageSession for StaticSession {
    async fn load(&mut self, url: &str, _wait: WaitPolicy) -> Result<()> {
        let page = self.site.pages.read().await.get(url).cloned();
        let Some(page) = page else {
            return Err(CrawlError::navigation(url, "404 Not Found"));
        };

        match &page.behavior {
            LoadBehavior::Ok => {}
            LoadBehavior::Fail(message) => return Err(CrawlError::navigation(url, message.clone())),
            LoadBehavior::Hang => std::future::pending::<()>().await,
        }

        self.current = Some(page);
        Ok(())
    }

    async fn find_attribute(
        &mut self,
        selector: &str,
        attribute: &str,
        _timeout: Duration,
    ) -> Result<Option<String>> {
        Ok(self
            .current
            .as_ref()
            .and_then(|page| page.elements.get(selector))
            .and_then(|attrs| attrs.get(attribute))
            .cloned())
    }

    async fn all_anchors(&mut self) -> Result<Vec<String>> {
        Ok(self
            .current
            .as_ref()
            .map(|page| page.anchors.clone())
            .unwrap_or_default())
    }

    async fn release(self: Box<Self>) -> Result<()> {
        self.site.counters.released.fetch_add(1, Ordering::SeqCst);

        if self.site.counters.hang_release.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }

        if self.site.counters.fail_release.load(Ordering::SeqCst) {
            return Err(CrawlError::session("browser failed to close"));
        }

        Ok(())
    }
}
