mod config;
mod crawl_config;
mod database_config;
mod domains_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use crawl_config::CrawlConfig;
pub use database_config::DatabaseConfig;
pub use domains_config::DomainsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

pub const CONFIG_DIR_ENV: &str = "CW_CONFIG_DIR";
pub const DEFAULT_CONFIG_DIR: &str = ".cw";
pub const CONFIG_FILENAME: &str = "config.toml";

// Server
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const MIN_PORT: u16 = 1024;

// Database
pub const DEFAULT_DATABASE_FILENAME: &str = "credentials.db";

// Logging
pub const DEFAULT_LOG_LEVEL_STRING: &str = "info";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
pub const DEFAULT_LOG_DIRECTORY: &str = "log";
pub const DEFAULT_LOG_COLORED: bool = true;

// Crawl
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:4444";
pub const DEFAULT_HEADLESS: bool = true;

pub const MIN_NAVIGATION_TIMEOUT_SECS: u64 = 1;
pub const MAX_NAVIGATION_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_NAVIGATION_TIMEOUT_SECS: u64 = 30;

pub const MIN_LINK_WAIT_SECS: u64 = 1;
pub const MAX_LINK_WAIT_SECS: u64 = 60;
pub const DEFAULT_LINK_WAIT_SECS: u64 = 5;

pub const MAX_SETTLE_DELAY_MS: u64 = 30_000;
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 3_000;

pub const MIN_NETWORK_IDLE_MS: u64 = 100;
pub const MAX_NETWORK_IDLE_MS: u64 = 10_000;
pub const DEFAULT_NETWORK_IDLE_MS: u64 = 500;

pub const MIN_SESSION_TIMEOUT_SECS: u64 = 1;
pub const MAX_SESSION_TIMEOUT_SECS: u64 = 600;
pub const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 90;
