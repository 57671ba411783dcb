use crate::{
    AppState, discover_wallet, full_import, get_profile, health, list_credentials, sync_wallet,
    toggle_sync,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        // Wallet workflows
        .route("/api/discover", post(discover_wallet))
        .route("/api/sync", post(sync_wallet))
        .route("/api/full-import", post(full_import))
        .route("/api/toggle-sync", post(toggle_sync))
        // Lookups
        .route("/api/credentials/{user_id}", get(list_credentials))
        .route("/api/profile/{user_id}", get(get_profile))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
