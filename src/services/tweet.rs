use crate::db::TweetStore;
use crate::error::{AppError, Result};
use crate::models::{TimelineEntry, Tweet};

/// Posting tweets and reading timelines
#[derive(Debug, Clone)]
pub struct TweetService {
    store: TweetStore,
}

impl TweetService {
    pub fn new(store: TweetStore) -> Self {
        Self { store }
    }

    /// Post a tweet; text over the length limit is rejected and not stored
    pub async fn tweet(&self, user_id: i64, tweet: &str) -> Result<()> {
        if !Tweet::validate_length(tweet) {
            tracing::warn!(
                "Rejected tweet from user {}: {} characters",
                user_id,
                tweet.chars().count()
            );
            return Err(AppError::TweetTooLong);
        }

        self.store.insert_tweet(user_id, tweet).await?;
        tracing::info!("User {} posted a tweet", user_id);

        Ok(())
    }

    /// The user's timeline: own tweets plus followees', in posting order
    pub async fn timeline(&self, user_id: i64) -> Result<Vec<TimelineEntry>> {
        self.store.get_timeline(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_TWEET_LENGTH;
    use crate::db::{open_in_memory, UserStore};
    use crate::models::NewUser;

    async fn setup() -> (UserStore, TweetService) {
        let pool = open_in_memory().await.unwrap();
        let users = UserStore::new(pool.clone());
        for (name, email) in [("kim", "kim@"), ("lee", "lee@")] {
            let user = NewUser {
                name: name.to_string(),
                email: email.to_string(),
                profile: String::new(),
                password: "pw".to_string(),
            };
            users.insert_user(&user, "hash").await.unwrap();
        }

        let service = TweetService::new(TweetStore::new(pool));
        service.tweet(2, "hi kim").await.unwrap();
        (users, service)
    }

    #[tokio::test]
    async fn test_tweet() {
        let (_, service) = setup().await;

        service.tweet(1, "hi lee").await.unwrap();

        assert_eq!(
            service.timeline(1).await.unwrap(),
            vec![TimelineEntry::new(1, "hi lee")]
        );
    }

    #[tokio::test]
    async fn test_tweet_too_long_is_not_stored() {
        let (_, service) = setup().await;

        let result = service.tweet(1, &"a".repeat(MAX_TWEET_LENGTH + 1)).await;

        assert!(matches!(result, Err(AppError::TweetTooLong)));
        assert!(service.timeline(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_tweet_at_limit_is_stored() {
        let (_, service) = setup().await;

        service.tweet(1, &"a".repeat(MAX_TWEET_LENGTH)).await.unwrap();
        assert_eq!(service.timeline(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_timeline() {
        let (users, service) = setup().await;

        service.tweet(1, "hi lee").await.unwrap();
        service.tweet(2, "bye kim").await.unwrap();
        users.insert_follow(1, 2).await.unwrap();

        assert_eq!(
            service.timeline(1).await.unwrap(),
            vec![
                TimelineEntry::new(2, "hi kim"),
                TimelineEntry::new(1, "hi lee"),
                TimelineEntry::new(2, "bye kim"),
            ]
        );
    }
}
