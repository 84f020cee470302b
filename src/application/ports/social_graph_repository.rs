use async_trait::async_trait;

/// Directed follow edges. Seeded externally; read-only on this surface.
#[async_trait]
pub trait SocialGraphRepository: Send + Sync {
    /// Names of the users `user_id` follows.
    async fn following_names(&self, user_id: i64) -> anyhow::Result<Vec<String>>;
    /// Names of the users following `user_id`.
    async fn follower_names(&self, user_id: i64) -> anyhow::Result<Vec<String>>;
}
