use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::auth::AuthUser;
use crate::error::Result;
use crate::models::{Timeline, Tweet};
use crate::AppState;

/// Post a tweet as the caller
///
/// Returns 400 if the text is longer than 300 characters.
pub async fn tweet(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<Tweet>,
) -> Result<StatusCode> {
    state
        .tweet_service
        .tweet(auth.user_id, &payload.tweet)
        .await?;
    Ok(StatusCode::OK)
}

/// Timeline of any user by id; unknown ids get an empty timeline
pub async fn timeline(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Timeline>> {
    let timeline = state.tweet_service.timeline(user_id).await?;
    Ok(Json(Timeline { user_id, timeline }))
}

/// Timeline of the caller
pub async fn user_timeline(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<Json<Timeline>> {
    let timeline = state.tweet_service.timeline(auth.user_id).await?;
    Ok(Json(Timeline {
        user_id: auth.user_id,
        timeline,
    }))
}
