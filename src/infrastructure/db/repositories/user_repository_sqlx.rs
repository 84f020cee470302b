use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::user_repository::{UserRepository, UserRow};
use crate::infrastructure::db::DbPool;

pub struct SqlxUserRepository {
    pub pool: DbPool,
}

impl SqlxUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(
        &self,
        name: &str,
        username: &str,
        password_hash: &str,
        gender: &str,
    ) -> anyhow::Result<UserRow> {
        let row = sqlx::query(
            r#"INSERT INTO user (name, username, password_hash, gender) VALUES (?, ?, ?, ?)
               RETURNING user_id, name, username, password_hash, gender"#,
        )
        .bind(name)
        .bind(username)
        .bind(password_hash)
        .bind(gender)
        .fetch_one(&self.pool)
        .await?;
        Ok(UserRow {
            user_id: row.get("user_id"),
            name: row.get("name"),
            username: row.get("username"),
            password_hash: row.try_get("password_hash").ok(),
            gender: row.get("gender"),
        })
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>> {
        let row = sqlx::query(
            r#"SELECT user_id, name, username, password_hash, gender FROM user WHERE username = ?"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|r| UserRow {
            user_id: r.get("user_id"),
            name: r.get("name"),
            username: r.get("username"),
            password_hash: r.try_get("password_hash").ok(),
            gender: r.get("gender"),
        }))
    }

    async fn find_id_by_username(&self, username: &str) -> anyhow::Result<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>(r#"SELECT user_id FROM user WHERE username = ?"#)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ServiceError;
    use crate::application::use_cases::auth::login::{Login, LoginRequest};
    use crate::application::use_cases::auth::register::{Register, RegisterRequest};
    use crate::infrastructure::db::test_util::memory_pool;

    fn request(username: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.into(),
            password: password.into(),
            name: "Test User".into(),
            gender: "female".into(),
        }
    }

    #[tokio::test]
    async fn create_and_find_round_trip() {
        let repo = SqlxUserRepository::new(memory_pool().await);
        let created = repo
            .create_user("Alice", "alice", "not-a-real-hash", "female")
            .await
            .unwrap();
        assert!(created.user_id > 0);

        let found = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.user_id, created.user_id);
        assert_eq!(found.name, "Alice");
        assert_eq!(found.password_hash.as_deref(), Some("not-a-real-hash"));

        let id = repo.find_id_by_username("alice").await.unwrap();
        assert_eq!(id, Some(created.user_id));
        assert_eq!(repo.find_id_by_username("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn register_rejects_short_password() {
        let repo = SqlxUserRepository::new(memory_pool().await);
        let uc = Register { repo: &repo };
        let err = uc.execute(&request("alice", "short")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(err.to_string(), "Password is too short");
        // Nothing was stored
        assert!(repo.find_by_username("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn register_rejects_duplicate_username() {
        let repo = SqlxUserRepository::new(memory_pool().await);
        let uc = Register { repo: &repo };
        uc.execute(&request("alice", "secret1")).await.unwrap();
        let err = uc.execute(&request("alice", "secret2")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
        assert_eq!(err.to_string(), "User already exists");
    }

    #[tokio::test]
    async fn login_round_trip() {
        let repo = SqlxUserRepository::new(memory_pool().await);
        Register { repo: &repo }
            .execute(&request("alice", "secret1"))
            .await
            .unwrap();

        let login = Login { repo: &repo };
        let user = login
            .execute(&LoginRequest {
                username: "alice".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap();
        assert_eq!(user.username, "alice");
        // The hash never leaves the use case
        assert!(user.password_hash.is_none());

        let err = login
            .execute(&LoginRequest {
                username: "alice".into(),
                password: "wrong-password".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid password");

        let err = login
            .execute(&LoginRequest {
                username: "nobody".into(),
                password: "secret1".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid user");
    }
}
