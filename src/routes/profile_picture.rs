use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Serialize;

use crate::auth::AuthUser;
use crate::constants::PROFILE_PICTURE_FIELD;
use crate::error::{AppError, Result};
use crate::storage::secure_filename;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ProfilePictureResponse {
    pub img_url: String,
}

/// Upload the caller's profile picture (multipart field `profile_pic`)
///
/// A missing field, or a filename that is empty once sanitized, answers 404
/// "file is missing". Re-uploading replaces the stored URL.
pub async fn upload_profile_picture(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    mut multipart: Multipart,
) -> Result<StatusCode> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PROFILE_PICTURE_FIELD) {
            continue;
        }

        let filename = secure_filename(field.file_name().unwrap_or_default());
        if filename.is_empty() {
            tracing::warn!("Profile picture upload without filename from user {}", auth.user_id);
            return Err(AppError::FileMissing);
        }

        let picture = field.bytes().await?;
        state
            .user_service
            .save_profile_picture(&picture, &filename, auth.user_id)
            .await?;

        return Ok(StatusCode::OK);
    }

    tracing::warn!("Profile picture upload without file from user {}", auth.user_id);
    Err(AppError::FileMissing)
}

/// Public URL of a user's profile picture, 404 if none was uploaded
pub async fn get_profile_picture(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<ProfilePictureResponse>> {
    let img_url = state
        .user_service
        .get_profile_picture(user_id)
        .await?
        .ok_or(AppError::ProfilePictureNotFound)?;

    Ok(Json(ProfilePictureResponse { img_url }))
}
