use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::NewUser;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: i64,
    pub access_token: String,
}

/// Register a new user
///
/// Responds with the new user id. Returns 409 Conflict if the email is
/// already registered and 400 if name, email or password is blank.
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<Json<i64>> {
    let user_id = state.user_service.create_new_user(payload).await?;
    Ok(Json(user_id))
}

/// Exchange email and password for an access token
///
/// Unknown email and wrong password both answer 401.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user_id = state
        .user_service
        .login(&payload.email, &payload.password)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let access_token = state.user_service.generate_access_token(user_id)?;

    tracing::info!("User {} logged in", user_id);

    Ok(Json(LoginResponse {
        user_id,
        access_token,
    }))
}
