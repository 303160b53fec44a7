use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::TimelineEntry;

/// Persistence for tweets, and the timeline query built on top of them
#[derive(Debug, Clone)]
pub struct TweetStore {
    pool: SqlitePool,
}

impl TweetStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a tweet; its autoincrement id fixes its place in every timeline
    pub async fn insert_tweet(&self, user_id: i64, tweet: &str) -> Result<u64> {
        let result = sqlx::query("INSERT INTO tweets (user_id, tweet) VALUES (?, ?)")
            .bind(user_id)
            .bind(tweet)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// The user's own tweets merged with those of everyone they follow
    ///
    /// Rows come back in global insertion order (tweet id), so authors are
    /// interleaved rather than grouped. Followees are matched with `IN`, which
    /// keeps each tweet to a single row however many times the same edge was
    /// stored. Unknown users simply get an empty list.
    pub async fn get_timeline(&self, user_id: i64) -> Result<Vec<TimelineEntry>> {
        let rows = sqlx::query_as::<_, TimelineEntry>(
            r#"
            SELECT t.user_id, t.tweet
            FROM tweets t
            WHERE t.user_id = ?
               OR t.user_id IN (
                    SELECT ufl.follow_user_id
                    FROM users_follow_list ufl
                    WHERE ufl.user_id = ?
               )
            ORDER BY t.id
            "#,
        )
        .bind(user_id)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
