use crate::application::error::ServiceError;
use crate::application::ports::tweet_repository::{FeedTweetRow, TweetRepository};

/// Page size of the home feed. Part of the API contract.
pub const FEED_LIMIT: i64 = 4;

pub struct FeedTweets<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> FeedTweets<'a, R> {
    pub async fn execute(&self, viewer_id: i64) -> Result<Vec<FeedTweetRow>, ServiceError> {
        Ok(self.repo.feed_for(viewer_id, FEED_LIMIT).await?)
    }
}
