//! Minitter Server Library
//!
//! A small social-network backend: sign-up/login, a follow graph, tweets,
//! timelines and profile pictures. This module exports the core types and
//! functions for testing and reuse.

pub mod auth;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;
pub mod storage;

pub use config::Config;
pub use db::{open_database, Db};
pub use error::{AppError, Result};
pub use routes::router;

use std::sync::Arc;

use db::{TweetStore, UserStore};
use services::{TweetService, UserService};
use storage::{LocalDirStorage, ProfilePictureStorage};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
    pub user_service: UserService,
    pub tweet_service: TweetService,
}

impl AppState {
    /// Wire stores and services around an open database
    pub fn new(db: Db, config: Config, pictures: Arc<dyn ProfilePictureStorage>) -> Self {
        let user_service = UserService::new(UserStore::new(db.clone()), config.clone(), pictures);
        let tweet_service = TweetService::new(TweetStore::new(db.clone()));

        Self {
            db,
            config,
            user_service,
            tweet_service,
        }
    }

    /// Same as [`AppState::new`], storing pictures in the configured upload directory
    pub fn with_local_storage(db: Db, config: Config) -> Self {
        let pictures = Arc::new(LocalDirStorage::new(
            &config.upload_dir,
            &config.profile_picture_base_url,
        ));
        Self::new(db, config, pictures)
    }
}
