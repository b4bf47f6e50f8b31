use tracing::info;
use uuid::Uuid;

use crate::database::{user_repo, Store};
use crate::error::{ApiError, ApiResult};
use crate::models::{NewUserProfile, UserProfile, UserProfileUpdate};

pub async fn create_user(store: &Store, body: NewUserProfile) -> UserProfile {
    let id = Uuid::new_v4().to_string();
    let profile = user_repo::insert_user(store, &id, body.into_profile(id.clone())).await;
    info!(user_id = %id, "user created");
    profile
}

pub async fn get_user(store: &Store, user_id: &str) -> ApiResult<UserProfile> {
    user_repo::load_user(store, user_id)
        .await
        .ok_or_else(|| ApiError::not_found("User"))
}

/// Never fails on an unknown id: the record is created on the fly.
pub async fn update_user(store: &Store, user_id: &str, update: UserProfileUpdate) -> UserProfile {
    let profile = user_repo::upsert_user(store, user_id, update).await;
    info!(user_id = %user_id, "user updated");
    profile
}
