use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{FollowEdge, NewUser, User, UserCredential};

/// Persistence for users, credentials, profile pictures and the follow graph
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user and return the generated id
    ///
    /// A taken email surfaces as `EmailAlreadyExists`; every other failure is
    /// passed through as a database error.
    pub async fn insert_user(&self, user: &NewUser, hashed_password: &str) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, profile, hashed_password)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.profile)
        .bind(hashed_password)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::EmailAlreadyExists
            }
            other => AppError::Database(other),
        })?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, profile FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    pub async fn get_user_id_and_password(&self, email: &str) -> Result<Option<UserCredential>> {
        let credential = sqlx::query_as::<_, UserCredential>(
            "SELECT id, hashed_password FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(credential)
    }

    /// Add a follow edge. Not idempotent: repeating it stores another row.
    pub async fn insert_follow(&self, user_id: i64, follow_id: i64) -> Result<u64> {
        let result = sqlx::query(
            "INSERT INTO users_follow_list (user_id, follow_user_id) VALUES (?, ?)",
        )
        .bind(user_id)
        .bind(follow_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Remove every edge for the exact (user, followee) pair in one statement
    pub async fn insert_unfollow(&self, user_id: i64, unfollow_id: i64) -> Result<u64> {
        let result = sqlx::query(
            "DELETE FROM users_follow_list WHERE user_id = ? AND follow_user_id = ?",
        )
        .bind(user_id)
        .bind(unfollow_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Distinct ids the user follows, ascending
    pub async fn get_followees(&self, user_id: i64) -> Result<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT DISTINCT follow_user_id
            FROM users_follow_list
            WHERE user_id = ?
            ORDER BY follow_user_id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    /// Raw follow rows for a user, duplicates included, in insertion order
    pub async fn get_follow_edges(&self, user_id: i64) -> Result<Vec<FollowEdge>> {
        let edges = sqlx::query_as::<_, FollowEdge>(
            r#"
            SELECT user_id, follow_user_id
            FROM users_follow_list
            WHERE user_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(edges)
    }

    pub async fn save_profile_picture(&self, profile_pic_url: &str, user_id: i64) -> Result<u64> {
        let result = sqlx::query("UPDATE users SET profile_picture = ? WHERE id = ?")
            .bind(profile_pic_url)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn get_profile_picture(&self, user_id: i64) -> Result<Option<String>> {
        let url = sqlx::query_scalar::<_, Option<String>>(
            "SELECT profile_picture FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(url.flatten())
    }
}
