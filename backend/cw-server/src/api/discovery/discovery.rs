//! Wallet discovery handler

use crate::{ApiResult, AppState, DiscoverRequest, DiscoverResponse};

use axum::{Json, extract::State};

/// POST /api/discover
///
/// Find the wallet linked from a certificate page without storing anything
pub async fn discover_wallet(
    State(state): State<AppState>,
    Json(req): Json<DiscoverRequest>,
) -> ApiResult<Json<DiscoverResponse>> {
    let wallet_url = state
        .coordinator
        .discover(&req.user_id, &req.cert_url)
        .await?;

    Ok(Json(DiscoverResponse { wallet_url }))
}
