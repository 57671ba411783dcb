//! [`SessionLauncher`] backed by a W3C WebDriver endpoint (chromedriver,
//! geckodriver) through `fantoccini`.

use crate::{CrawlError, IdleTracker, PageSession, Result, SessionLauncher, WaitPolicy};

use cw_config::CrawlConfig;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use fantoccini::error::CmdError;
use fantoccini::wd::{Capabilities, TimeoutConfiguration};
use fantoccini::{Client, ClientBuilder, Locator};
use log::{debug, info, warn};
use serde_json::{Value, json};

const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Resource count once the document is complete, -1 while still loading
const RESOURCE_COUNT_SCRIPT: &str = "return document.readyState === 'complete' \
     ? performance.getEntriesByType('resource').length : -1;";

const ANCHOR_HREFS_SCRIPT: &str = "return Array.from(document.querySelectorAll('a[href]'), \
     function (a) { return a.href; });";

pub struct WebDriverLauncher {
    endpoint: String,
    headless: bool,
    navigation_timeout: Duration,
}

impl WebDriverLauncher {
    pub fn new(endpoint: impl Into<String>, headless: bool, navigation_timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            headless,
            navigation_timeout,
        }
    }

    pub fn from_config(config: &CrawlConfig) -> Self {
        Self::new(
            config.webdriver_url.trim(),
            config.headless,
            Duration::from_secs(config.navigation_timeout_secs),
        )
    }

    fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::new();
        if self.headless {
            caps.insert(
                "goog:chromeOptions".to_string(),
                json!({ "args": ["--headless=new", "--disable-gpu", "--no-sandbox"] }),
            );
            caps.insert(
                "moz:firefoxOptions".to_string(),
                json!({ "args": ["-headless"] }),
            );
        }
        caps
    }
}

#[async_trait]
impl SessionLauncher for WebDriverLauncher {
    async fn launch(&self) -> Result<Box<dyn PageSession>> {
        let mut builder = ClientBuilder::native();
        builder.capabilities(self.capabilities());

        let client = builder.connect(&self.endpoint).await.map_err(|e| {
            CrawlError::session(format!(
                "Failed to start WebDriver session at {}: {}",
                self.endpoint, e
            ))
        })?;

        let timeouts = TimeoutConfiguration::new(None, Some(self.navigation_timeout), None);
        if let Err(e) = client.update_timeouts(timeouts).await {
            if let Err(close_err) = client.close().await {
                warn!("Failed to close WebDriver session: {}", close_err);
            }
            return Err(CrawlError::session(format!(
                "Failed to set page load timeout: {}",
                e
            )));
        }

        debug!("WebDriver session started at {}", self.endpoint);

        Ok(Box::new(WebDriverSession { client }))
    }
}

struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    async fn wait_for_network_idle(
        &mut self,
        url: &str,
        idle: Duration,
        max_wait: Duration,
        started: Instant,
    ) -> Result<()> {
        let deadline = started + max_wait;
        let mut tracker = IdleTracker::new(idle, Instant::now());

        loop {
            let sample = self
                .client
                .execute(RESOURCE_COUNT_SCRIPT, vec![])
                .await
                .map_err(|e| CrawlError::navigation(url, e.to_string()))?;
            let count = sample.as_i64().and_then(|c| u64::try_from(c).ok());

            let now = Instant::now();
            if tracker.observe(count, now) {
                return Ok(());
            }
            if now >= deadline {
                return Err(CrawlError::navigation(
                    url,
                    format!("network did not go idle within {}ms", max_wait.as_millis()),
                ));
            }

            tokio::time::sleep(IDLE_POLL_INTERVAL).await;
        }
    }
}

#[async_trait]
impl PageSession for WebDriverSession {
    async fn load(&mut self, url: &str, wait: WaitPolicy) -> Result<()> {
        info!("Navigating to {}", url);
        let started = Instant::now();

        self.client
            .goto(url)
            .await
            .map_err(|e| CrawlError::navigation(url, e.to_string()))?;

        match wait {
            WaitPolicy::Load => Ok(()),
            WaitPolicy::NetworkIdle { idle, max_wait } => {
                self.wait_for_network_idle(url, idle, max_wait, started)
                    .await
            }
        }
    }

    async fn find_attribute(
        &mut self,
        selector: &str,
        attribute: &str,
        timeout: Duration,
    ) -> Result<Option<String>> {
        let found = self
            .client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await;

        let element = match found {
            Ok(element) => element,
            Err(CmdError::WaitTimeout) => return Ok(None),
            Err(e) if e.is_no_such_element() => return Ok(None),
            Err(e) => {
                return Err(CrawlError::session(format!(
                    "Lookup of '{}' failed: {}",
                    selector, e
                )));
            }
        };

        element.attr(attribute).await.map_err(|e| {
            CrawlError::session(format!(
                "Reading {} of '{}' failed: {}",
                attribute, selector, e
            ))
        })
    }

    async fn all_anchors(&mut self) -> Result<Vec<String>> {
        let value = self
            .client
            .execute(ANCHOR_HREFS_SCRIPT, vec![])
            .await
            .map_err(|e| CrawlError::session(format!("Reading anchors failed: {}", e)))?;

        Ok(hrefs_from_value(value))
    }

    async fn release(self: Box<Self>) -> Result<()> {
        self.client
            .close()
            .await
            .map_err(|e| CrawlError::session(format!("Failed to close WebDriver session: {}", e)))
    }
}

/// Non-empty strings of a JSON array; anything else is skipped
pub(crate) fn hrefs_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(href) if !href.trim().is_empty() => Some(href),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}
