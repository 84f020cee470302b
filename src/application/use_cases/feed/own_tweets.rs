use crate::application::error::ServiceError;
use crate::application::ports::tweet_repository::{TweetRepository, TweetStatsRow};

/// The requester's own tweets with like/reply counts, newest first.
/// Zero-engagement tweets are included with counts of 0.
pub struct OwnTweets<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> OwnTweets<'a, R> {
    pub async fn execute(&self, owner_id: i64) -> Result<Vec<TweetStatsRow>, ServiceError> {
        Ok(self.repo.tweets_with_counts(owner_id).await?)
    }
}
