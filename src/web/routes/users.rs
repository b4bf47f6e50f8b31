use axum::{
    extract::{Path, State},
    Json,
};
use tracing::warn;

use crate::database::Store;
use crate::error::ApiResult;
use crate::models::responses::UserEnvelope;
use crate::models::{NewUserProfile, UserProfile, UserProfileUpdate};
use crate::services::user_service;
use crate::web::extract::ApiJson;

pub async fn create_user_handler(
    State(store): State<Store>,
    ApiJson(body): ApiJson<NewUserProfile>,
) -> Json<UserEnvelope> {
    let user = user_service::create_user(&store, body).await;
    Json(UserEnvelope {
        message: "User created",
        user,
    })
}

pub async fn get_user_handler(
    Path(user_id): Path<String>,
    State(store): State<Store>,
) -> ApiResult<Json<UserProfile>> {
    let user = user_service::get_user(&store, &user_id).await.map_err(|e| {
        warn!("User lookup failed for {}: {}", user_id, e);
        e
    })?;
    Ok(Json(user))
}

pub async fn update_user_handler(
    Path(user_id): Path<String>,
    State(store): State<Store>,
    ApiJson(body): ApiJson<UserProfileUpdate>,
) -> Json<UserEnvelope> {
    let user = user_service::update_user(&store, &user_id, body).await;
    Json(UserEnvelope {
        message: "User updated",
        user,
    })
}
