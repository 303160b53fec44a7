use serde::{Deserialize, Serialize};

use crate::constants::MAX_TWEET_LENGTH;

/// Tweet body as posted by a user
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub tweet: String,
}

impl Tweet {
    /// Whether the text fits within the tweet length limit
    ///
    /// The limit counts characters, so multi-byte text is not penalised.
    pub fn validate_length(text: &str) -> bool {
        text.chars().count() <= MAX_TWEET_LENGTH
    }
}

/// One row of a timeline: who wrote it and what they wrote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TimelineEntry {
    pub user_id: i64,
    pub tweet: String,
}

impl TimelineEntry {
    pub fn new(user_id: i64, tweet: impl Into<String>) -> Self {
        Self {
            user_id,
            tweet: tweet.into(),
        }
    }
}

/// Timeline response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub user_id: i64,
    pub timeline: Vec<TimelineEntry>,
}
