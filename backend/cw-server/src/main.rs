use cw_server::{AppState, build_router, logger};

use cw_config::Config;
use cw_core::{DomainAllowlist, ExtractionRule};
use cw_crawl::{CrawlSettings, WebDriverLauncher};
use cw_db::{SqliteStore, open_pool};
use cw_sync::SyncCoordinator;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(parent) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(parent)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cw-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Database
    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = open_pool(&database_path).await?;
    info!("Migrations complete");

    // Crawl pipeline
    let rule = ExtractionRule::new(DomainAllowlist::new(&config.domains.allowed))?;
    let settings = CrawlSettings::from(&config.crawl);
    let launcher = Arc::new(WebDriverLauncher::from_config(&config.crawl));
    let coordinator =
        SyncCoordinator::with_launcher(launcher, &settings, rule, Arc::new(SqliteStore::new(pool)));

    let app = build_router(AppState::new(coordinator));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Server stopped");

    Ok(())
}
