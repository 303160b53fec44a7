pub mod auth;
pub mod follow;
pub mod health;
pub mod profile_picture;
pub mod tweet;

pub use auth::{login, sign_up};
pub use follow::{follow, unfollow};
pub use health::{health_check, ping};
pub use profile_picture::{get_profile_picture, upload_profile_picture};
pub use tweet::{timeline, tweet, user_timeline};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::auth::require_auth;
use crate::AppState;

/// Path uploaded profile pictures are served from
pub const PROFILE_PICTURE_STATIC_PATH: &str = "/static/profile-pictures";

/// Build the application router
///
/// Routes that act on behalf of the caller sit behind [`require_auth`];
/// timeline and profile-picture lookups by id are public.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/tweet", post(tweet))
        .route("/follow", post(follow))
        .route("/unfollow", post(unfollow))
        .route("/timeline", get(user_timeline))
        .route("/profile-picture", post(upload_profile_picture))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/ping", get(ping))
        .route("/health", get(health_check))
        .route("/sign-up", post(sign_up))
        .route("/login", post(login))
        .route("/timeline/:user_id", get(timeline))
        .route("/profile-picture/:user_id", get(get_profile_picture))
        .merge(protected)
        .nest_service(
            PROFILE_PICTURE_STATIC_PATH,
            ServeDir::new(&state.config.upload_dir),
        )
        .with_state(state)
}
