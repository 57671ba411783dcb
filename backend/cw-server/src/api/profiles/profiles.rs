use crate::{ApiResult, AppState, ProfileDto, ProfileResponse};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/profile/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state.coordinator.profile_for_user(&user_id).await?;

    Ok(Json(ProfileResponse {
        profile: profile.map(ProfileDto::from),
    }))
}
