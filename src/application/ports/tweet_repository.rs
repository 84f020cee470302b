use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct TweetRow {
    pub tweet_id: i64,
    pub tweet: String,
    pub user_id: i64,
    pub date_time: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct FeedTweetRow {
    pub username: String,
    pub tweet: String,
    pub date_time: DateTime<Utc>,
}

/// One tweet with its engagement counts.
#[derive(Debug, Clone)]
pub struct TweetStatsRow {
    pub tweet: String,
    pub likes: i64,
    pub replies: i64,
    pub date_time: DateTime<Utc>,
}

#[async_trait]
pub trait TweetRepository: Send + Sync {
    async fn create_tweet(
        &self,
        user_id: i64,
        text: &str,
        date_time: DateTime<Utc>,
    ) -> anyhow::Result<i64>;
    async fn find_by_id(&self, tweet_id: i64) -> anyhow::Result<Option<TweetRow>>;
    /// The tweet, only when its owner is in the viewer's following-set.
    async fn find_visible(&self, tweet_id: i64, viewer_id: i64)
    -> anyhow::Result<Option<TweetRow>>;
    /// Latest tweets by followed authors, newest first.
    async fn feed_for(&self, viewer_id: i64, limit: i64) -> anyhow::Result<Vec<FeedTweetRow>>;
    /// The owner's tweets with like/reply counts, newest first.
    async fn tweets_with_counts(&self, owner_id: i64) -> anyhow::Result<Vec<TweetStatsRow>>;
    async fn delete_tweet(&self, tweet_id: i64) -> anyhow::Result<bool>;
}
