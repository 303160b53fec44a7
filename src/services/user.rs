use std::sync::Arc;

use crate::config::Config;
use crate::db::UserStore;
use crate::error::{AppError, Result};
use crate::models::NewUser;
use crate::security::{decode_access_token, generate_access_token, hash_password, verify_password};
use crate::storage::ProfilePictureStorage;

/// Sign-up, login, access tokens, the follow graph and profile pictures
#[derive(Clone)]
pub struct UserService {
    store: UserStore,
    config: Config,
    pictures: Arc<dyn ProfilePictureStorage>,
}

impl UserService {
    pub fn new(store: UserStore, config: Config, pictures: Arc<dyn ProfilePictureStorage>) -> Self {
        Self {
            store,
            config,
            pictures,
        }
    }

    /// Register a user and return the new id
    pub async fn create_new_user(&self, new_user: NewUser) -> Result<i64> {
        if !new_user.validate() {
            return Err(AppError::InvalidInput(
                crate::constants::ERR_SIGN_UP_FIELDS.to_string(),
            ));
        }

        // argon2 hashing blocks, run it on the blocking pool
        let password = new_user.password.clone();
        let hashed_password = tokio::task::spawn_blocking(move || hash_password(&password)).await??;

        let user_id = self.store.insert_user(&new_user, &hashed_password).await?;
        tracing::info!("New user registered: {}", user_id);

        Ok(user_id)
    }

    /// Check credentials, returning the user id when they match
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<i64>> {
        let Some(credential) = self.store.get_user_id_and_password(email).await? else {
            tracing::info!("Login attempt for unknown email");
            return Ok(None);
        };

        let password = password.to_string();
        let hashed_password = credential.hashed_password;
        let authorized =
            tokio::task::spawn_blocking(move || verify_password(&password, &hashed_password))
                .await?;

        if authorized {
            Ok(Some(credential.id))
        } else {
            tracing::info!("Wrong password for user {}", credential.id);
            Ok(None)
        }
    }

    pub fn generate_access_token(&self, user_id: i64) -> Result<String> {
        let token = generate_access_token(
            user_id,
            &self.config.jwt_secret_key,
            self.config.jwt_expire_secs,
        )?;
        Ok(token)
    }

    /// Resolve an access token to the user id it was issued for
    pub fn verify_access_token(&self, token: &str) -> Result<i64> {
        decode_access_token(token, &self.config.jwt_secret_key)
            .map(|claims| claims.user_id)
            .map_err(|e| {
                tracing::warn!("Rejected access token: {}", e);
                AppError::Unauthorized
            })
    }

    pub async fn follow(&self, user_id: i64, follow_id: i64) -> Result<u64> {
        let rows = self.store.insert_follow(user_id, follow_id).await?;
        tracing::info!("User {} followed {}", user_id, follow_id);
        Ok(rows)
    }

    pub async fn unfollow(&self, user_id: i64, unfollow_id: i64) -> Result<u64> {
        let rows = self.store.insert_unfollow(user_id, unfollow_id).await?;
        tracing::info!("User {} unfollowed {} ({} edges removed)", user_id, unfollow_id, rows);
        Ok(rows)
    }

    /// Store the picture and point the user's profile at its URL
    pub async fn save_profile_picture(
        &self,
        picture: &[u8],
        filename: &str,
        user_id: i64,
    ) -> Result<String> {
        let url = self.pictures.save(filename, picture).await?;
        self.store.save_profile_picture(&url, user_id).await?;

        tracing::info!("Profile picture updated for user {}", user_id);

        Ok(url)
    }

    pub async fn get_profile_picture(&self, user_id: i64) -> Result<Option<String>> {
        self.store.get_profile_picture(user_id).await
    }
}
