//! Sync REST API handlers
//!
//! Each request runs to completion; there is no background job or
//! cancellation.

use crate::{
    ApiResult, AppState, FullImportRequest, SyncRequest, ToggleSyncRequest, ToggleSyncResponse,
};

use cw_core::{ImportReport, SyncReport};

use axum::{Json, extract::State};

/// POST /api/sync
///
/// Save the profile and import any credentials not seen before
pub async fn sync_wallet(
    State(state): State<AppState>,
    Json(req): Json<SyncRequest>,
) -> ApiResult<Json<SyncReport>> {
    let report = state
        .coordinator
        .sync(&req.user_id, &req.wallet_url, req.auto_sync)
        .await?;

    Ok(Json(report))
}

/// POST /api/full-import
///
/// Discover the wallet behind a certificate and import it with auto-sync off
pub async fn full_import(
    State(state): State<AppState>,
    Json(req): Json<FullImportRequest>,
) -> ApiResult<Json<ImportReport>> {
    let report = state
        .coordinator
        .full_import(&req.user_id, &req.cert_url)
        .await?;

    Ok(Json(report))
}

/// POST /api/toggle-sync
pub async fn toggle_sync(
    State(state): State<AppState>,
    Json(req): Json<ToggleSyncRequest>,
) -> ApiResult<Json<ToggleSyncResponse>> {
    let updated = state
        .coordinator
        .set_auto_sync(&req.user_id, req.enable)
        .await?;

    Ok(Json(ToggleSyncResponse { updated }))
}
