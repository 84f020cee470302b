use crate::application::error::ServiceError;
use crate::application::ports::user_repository::UserRepository;

/// Maps a verified token claim to a stored identity. One DB read per call,
/// no caching.
pub struct ResolveIdentity<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> ResolveIdentity<'a, R> {
    pub async fn execute(&self, username: &str) -> Result<i64, ServiceError> {
        self.repo
            .find_id_by_username(username)
            .await?
            .ok_or_else(ServiceError::invalid_token)
    }
}
