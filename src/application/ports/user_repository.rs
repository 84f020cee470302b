use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct UserRow {
    pub user_id: i64,
    pub name: String,
    pub username: String,
    pub password_hash: Option<String>,
    pub gender: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(
        &self,
        name: &str,
        username: &str,
        password_hash: &str,
        gender: &str,
    ) -> anyhow::Result<UserRow>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<UserRow>>;
    async fn find_id_by_username(&self, username: &str) -> anyhow::Result<Option<i64>>;
}
