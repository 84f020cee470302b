use crate::application::error::ServiceError;
use crate::application::ports::tweet_repository::TweetRepository;

/// Ownership gates the delete: a tweet that is missing or belongs to
/// someone else answers 401 and the row is left untouched.
pub struct DeleteTweet<'a, R: TweetRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: TweetRepository + ?Sized> DeleteTweet<'a, R> {
    pub async fn execute(&self, requester_id: i64, tweet_id: i64) -> Result<(), ServiceError> {
        let row = self
            .repo
            .find_by_id(tweet_id)
            .await?
            .ok_or_else(ServiceError::invalid_request)?;
        if row.user_id != requester_id {
            return Err(ServiceError::invalid_request());
        }
        self.repo.delete_tweet(tweet_id).await?;
        Ok(())
    }
}
