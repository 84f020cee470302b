use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::application::error::ServiceError;
use crate::application::ports::user_repository::UserRepository;

const MIN_PASSWORD_LEN: usize = 6;

pub struct Register<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub gender: String,
}

impl<'a, R: UserRepository + ?Sized> Register<'a, R> {
    pub async fn execute(&self, req: &RegisterRequest) -> Result<(), ServiceError> {
        if req.password.len() < MIN_PASSWORD_LEN {
            return Err(ServiceError::Validation("Password is too short".into()));
        }
        if self.repo.find_by_username(&req.username).await?.is_some() {
            return Err(ServiceError::Conflict("User already exists".into()));
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(req.password.as_bytes(), &salt)
            .map_err(|e| ServiceError::Internal(e.to_string()))?
            .to_string();
        self.repo
            .create_user(&req.name, &req.username, &hash, &req.gender)
            .await?;
        Ok(())
    }
}
