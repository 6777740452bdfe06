//! Profile Calls

use urbanease_domain::{paths, Ack, ApiResult, ProfileUpdate};

use super::send_json;

pub async fn update_profile(update: &ProfileUpdate) -> ApiResult<Ack> {
    send_json("PUT", paths::PROFILE_UPDATE, update).await
}
