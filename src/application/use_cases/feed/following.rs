use crate::application::error::ServiceError;
use crate::application::ports::social_graph_repository::SocialGraphRepository;

pub struct Following<'a, R: SocialGraphRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SocialGraphRepository + ?Sized> Following<'a, R> {
    pub async fn execute(&self, viewer_id: i64) -> Result<Vec<String>, ServiceError> {
        Ok(self.repo.following_names(viewer_id).await?)
    }
}
