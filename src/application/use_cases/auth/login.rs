use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::error::ServiceError;
use crate::application::ports::user_repository::{UserRepository, UserRow};

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    /// Both failure modes answer 400, matching the historical contract.
    pub async fn execute(&self, req: &LoginRequest) -> Result<UserRow, ServiceError> {
        let row = self
            .repo
            .find_by_username(&req.username)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Invalid user".into()))?;
        let hash = row.password_hash.clone().unwrap_or_default();
        let parsed =
            PasswordHash::new(&hash).map_err(|e| ServiceError::Internal(e.to_string()))?;
        if Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed)
            .is_err()
        {
            return Err(ServiceError::NotFound("Invalid password".into()));
        }
        Ok(UserRow {
            password_hash: None,
            ..row
        })
    }
}
