use chrono::Utc;

use crate::application::error::ServiceError;
use crate::application::ports::tweet_repository::TweetRepository;

/// No length or content validation on the text; the surface never had any.
pub struct CreateTweet<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> CreateTweet<'a, R> {
    pub async fn execute(&self, owner_id: i64, text: &str) -> Result<i64, ServiceError> {
        Ok(self.repo.create_tweet(owner_id, text, Utc::now()).await?)
    }
}
