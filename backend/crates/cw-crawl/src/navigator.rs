use crate::{CrawlError, PageSession, Result, SessionLauncher};

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use log::{debug, error, warn};
use tokio::time::Instant;

/// Scoped access to browser sessions.
///
/// Every call to [`Navigator::with_session`] launches its own session and
/// runs the body, both under one session deadline, then releases the session
/// whatever the body's outcome. Release is bounded separately by the same
/// duration.
pub struct Navigator {
    launcher: Arc<dyn SessionLauncher>,
    session_timeout: Duration,
}

impl Navigator {
    pub fn new(launcher: Arc<dyn SessionLauncher>, session_timeout: Duration) -> Self {
        Self {
            launcher,
            session_timeout,
        }
    }

    pub async fn with_session<T, F>(&self, body: F) -> Result<T>
    where
        T: Send + 'static,
        F: for<'s> FnOnce(&'s mut dyn PageSession) -> BoxFuture<'s, Result<T>> + Send,
    {
        // Launch and body share one deadline; release gets its own
        let deadline = Instant::now() + self.session_timeout;

        let mut session = match tokio::time::timeout_at(deadline, self.launcher.launch()).await {
            Ok(launched) => launched?,
            Err(_) => {
                error!("Browser session did not start within the session deadline");
                return Err(CrawlError::timeout(self.session_timeout));
            }
        };
        debug!("Browser session opened");

        let outcome = match tokio::time::timeout_at(deadline, body(&mut *session)).await {
            Ok(result) => result,
            Err(_) => Err(CrawlError::timeout(self.session_timeout)),
        };

        let released = match tokio::time::timeout(self.session_timeout, session.release()).await
        {
            Ok(result) => result,
            Err(_) => Err(CrawlError::session(format!(
                "release did not finish within {}ms",
                self.session_timeout.as_millis()
            ))),
        };
        debug!("Browser session released");

        match (outcome, released) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(release_err)) => {
                error!("Failed to release browser session: {}", release_err);
                Err(match release_err {
                    err @ CrawlError::Session { .. } => err,
                    other => CrawlError::session(other.to_string()),
                })
            }
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(release_err)) => {
                warn!(
                    "Failed to release browser session after error ({}): {}",
                    err, release_err
                );
                Err(err)
            }
        }
    }
}
