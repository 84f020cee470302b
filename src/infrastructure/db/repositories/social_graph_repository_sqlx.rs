use async_trait::async_trait;

use crate::application::ports::social_graph_repository::SocialGraphRepository;
use crate::infrastructure::db::DbPool;

pub struct SqlxSocialGraphRepository {
    pub pool: DbPool,
}

impl SqlxSocialGraphRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SocialGraphRepository for SqlxSocialGraphRepository {
    async fn following_names(&self, user_id: i64) -> anyhow::Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"SELECT name FROM user
               WHERE user_id IN
                 (SELECT following_user_id FROM follower WHERE follower_user_id = ?)"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn follower_names(&self, user_id: i64) -> anyhow::Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"SELECT name FROM user
               WHERE user_id IN
                 (SELECT follower_user_id FROM follower WHERE following_user_id = ?)"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }
}
