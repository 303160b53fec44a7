//! Access-token gate for protected routes.
//!
//! Reads the token from the `Authorization` header (raw or `Bearer <token>`),
//! validates it and hands the caller's id to downstream handlers as an
//! [`AuthUser`] request extension.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::error::{AppError, Result};
use crate::AppState;

/// The authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i64,
}

/// Middleware rejecting requests without a valid access token (401)
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.strip_prefix("Bearer ").unwrap_or(v).trim())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            tracing::debug!("Missing access token for {}", request.uri().path());
            AppError::Unauthorized
        })?;

    let user_id = state.user_service.verify_access_token(token)?;
    request.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(request).await)
}
