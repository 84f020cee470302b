use crate::application::error::ServiceError;
use crate::application::ports::engagement_repository::{EngagementRepository, ReplyRow};
use crate::application::ports::tweet_repository::TweetRepository;

/// Same visibility gate as [`super::likes_of::LikesOf`]: the tweet decides,
/// the reply list may legitimately be empty.
pub struct RepliesOf<'a, T: TweetRepository + ?Sized, E: EngagementRepository + ?Sized> {
    pub tweets: &'a T,
    pub engagement: &'a E,
}

impl<'a, T: TweetRepository + ?Sized, E: EngagementRepository + ?Sized> RepliesOf<'a, T, E> {
    pub async fn execute(
        &self,
        viewer_id: i64,
        tweet_id: i64,
    ) -> Result<Vec<ReplyRow>, ServiceError> {
        self.tweets
            .find_visible(tweet_id, viewer_id)
            .await?
            .ok_or_else(ServiceError::invalid_request)?;
        Ok(self.engagement.replies(tweet_id, viewer_id).await?)
    }
}
