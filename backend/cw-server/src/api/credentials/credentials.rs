use crate::{ApiResult, AppState, CredentialDto, CredentialListResponse};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/credentials/{user_id}
///
/// Stored credentials of a user, oldest first
pub async fn list_credentials(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<CredentialListResponse>> {
    let credentials = state.coordinator.credentials_for_user(&user_id).await?;

    Ok(Json(CredentialListResponse {
        credentials: credentials.into_iter().map(CredentialDto::from).collect(),
    }))
}
