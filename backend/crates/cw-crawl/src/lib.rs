//! Browser-driven discovery of credential wallets and extraction of the
//! credential links they list.

pub mod credential_extractor;
pub mod error;
pub mod navigator;
pub mod page_session;
pub mod settings;
pub mod wait_policy;
pub mod wallet_discoverer;
pub mod webdriver;

#[cfg(any(test, feature = "testing"))]
pub mod testing;


pub use credential_extractor::CredentialExtractor;
pub use error::{CrawlError, Result};
pub use navigator::Navigator;
pub use page_session::{PageSession, SessionLauncher};
pub use settings::CrawlSettings;
pub use wait_policy::{IdleTracker, WaitPolicy};
pub use wallet_discoverer::{WALLET_LINK_SELECTOR, WalletDiscoverer};
pub use webdriver::WebDriverLauncher;
