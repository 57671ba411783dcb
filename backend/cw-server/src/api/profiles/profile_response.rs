use crate::ProfileDto;

use serde::Serialize;

/// Latest profile of a user; `null` when the user never synced
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub profile: Option<ProfileDto>,
}
