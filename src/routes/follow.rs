use axum::{extract::State, http::StatusCode, Extension, Json};
use serde::Deserialize;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    pub follow: i64,
}

#[derive(Debug, Deserialize)]
pub struct UnfollowRequest {
    pub unfollow: i64,
}

/// Follow another user (repeat calls store repeat edges)
pub async fn follow(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<FollowRequest>,
) -> Result<StatusCode> {
    state
        .user_service
        .follow(auth.user_id, payload.follow)
        .await?;
    Ok(StatusCode::OK)
}

/// Stop following a user, dropping every stored edge to them
pub async fn unfollow(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<UnfollowRequest>,
) -> Result<StatusCode> {
    state
        .user_service
        .unfollow(auth.user_id, payload.unfollow)
        .await?;
    Ok(StatusCode::OK)
}
