use crate::application::error::ServiceError;
use crate::application::ports::engagement_repository::EngagementRepository;
use crate::application::ports::tweet_repository::TweetRepository;

/// Visibility is decided on the tweet itself, so a visible tweet with no
/// likes answers 200 with an empty list rather than 401.
pub struct LikesOf<'a, T: TweetRepository + ?Sized, E: EngagementRepository + ?Sized> {
    pub tweets: &'a T,
    pub engagement: &'a E,
}

impl<'a, T: TweetRepository + ?Sized, E: EngagementRepository + ?Sized> LikesOf<'a, T, E> {
    pub async fn execute(
        &self,
        viewer_id: i64,
        tweet_id: i64,
    ) -> Result<Vec<String>, ServiceError> {
        self.tweets
            .find_visible(tweet_id, viewer_id)
            .await?
            .ok_or_else(ServiceError::invalid_request)?;
        Ok(self.engagement.liker_names(tweet_id, viewer_id).await?)
    }
}
