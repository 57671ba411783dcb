use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, CrawlConfig,
    DEFAULT_CONFIG_DIR, DatabaseConfig, DomainsConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub crawl: CrawlConfig,
    pub domains: DomainsConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for CW_CONFIG_DIR env var, else use ./.cw/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CW_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CW_CONFIG_DIR env var > ./.cw/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.crawl.validate()?;
        self.domains.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let config_dir = Self::config_dir()?;
                Ok(Some(config_dir.join(&self.logging.dir).join(filename)))
            }
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
        info!(
            "  crawl: webdriver={} headless={} navigation={}s link_wait={}s settle={}ms idle={}ms session={}s",
            self.crawl.webdriver_url,
            self.crawl.headless,
            self.crawl.navigation_timeout_secs,
            self.crawl.link_wait_secs,
            self.crawl.settle_delay_ms,
            self.crawl.network_idle_ms,
            self.crawl.session_timeout_secs
        );
        info!("  domains: {}", self.domains.allowed.join(", "));
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CW_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CW_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("CW_DATABASE_PATH", &mut self.database.path);

        // Logging
        Self::apply_env_parse("CW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CW_LOG_FILE", &mut self.logging.file);

        // Crawl
        Self::apply_env_string("CW_WEBDRIVER_URL", &mut self.crawl.webdriver_url);
        Self::apply_env_bool("CW_CRAWL_HEADLESS", &mut self.crawl.headless);
        Self::apply_env_parse(
            "CW_NAVIGATION_TIMEOUT_SECS",
            &mut self.crawl.navigation_timeout_secs,
        );
        Self::apply_env_parse("CW_LINK_WAIT_SECS", &mut self.crawl.link_wait_secs);
        Self::apply_env_parse("CW_SETTLE_DELAY_MS", &mut self.crawl.settle_delay_ms);
        Self::apply_env_parse("CW_NETWORK_IDLE_MS", &mut self.crawl.network_idle_ms);
        Self::apply_env_parse(
            "CW_SESSION_TIMEOUT_SECS",
            &mut self.crawl.session_timeout_secs,
        );

        // Domains
        if let Ok(val) = std::env::var("CW_ALLOWED_DOMAINS") {
            self.domains.allowed = DomainsConfig::parse_list(&val);
        }
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
