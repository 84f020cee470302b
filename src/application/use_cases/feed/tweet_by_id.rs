use crate::application::error::ServiceError;
use crate::application::ports::tweet_repository::{TweetRepository, TweetRow};

/// A missing tweet and an unfollowed owner are indistinguishable here;
/// both answer 401 `Invalid Request` (kept for wire compatibility even
/// though the condition is closer to not-found).
pub struct GetTweet<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> GetTweet<'a, R> {
    pub async fn execute(&self, viewer_id: i64, tweet_id: i64) -> Result<TweetRow, ServiceError> {
        self.repo
            .find_visible(tweet_id, viewer_id)
            .await?
            .ok_or_else(ServiceError::invalid_request)
    }
}
