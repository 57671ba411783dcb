use crate::{Result, WaitPolicy};

use std::time::Duration;

use async_trait::async_trait;

/// One live browser page owned by a single crawl.
///
/// Sessions are never shared. [`PageSession::release`] consumes the session
/// and must be called exactly once; [`crate::Navigator`] does this for you.
#[async_trait]
pub trait PageSession: Send {
    /// Navigate to `url` and wait per `wait`
    async fn load(&mut self, url: &str, wait: WaitPolicy) -> Result<()>;

    /// Wait up to `timeout` for an element matching the CSS `selector` and
    /// return its raw attribute value. `None` when nothing matched in time or
    /// the element lacks the attribute.
    async fn find_attribute(
        &mut self,
        selector: &str,
        attribute: &str,
        timeout: Duration,
    ) -> Result<Option<String>>;

    /// Resolved `href` of every anchor currently in the document
    async fn all_anchors(&mut self) -> Result<Vec<String>>;

    async fn release(self: Box<Self>) -> Result<()>;
}

/// Opens fresh, independent page sessions
#[async_trait]
pub trait SessionLauncher: Send + Sync {
    async fn launch(&self) -> Result<Box<dyn PageSession>>;
}
