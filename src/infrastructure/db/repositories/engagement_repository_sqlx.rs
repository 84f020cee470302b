use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::engagement_repository::{EngagementRepository, ReplyRow};
use crate::infrastructure::db::DbPool;

pub struct SqlxEngagementRepository {
    pub pool: DbPool,
}

impl SqlxEngagementRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngagementRepository for SqlxEngagementRepository {
    async fn liker_names(&self, tweet_id: i64, viewer_id: i64) -> anyhow::Result<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r#"SELECT name FROM user
               WHERE user_id IN
                 (SELECT user_id FROM "like"
                  WHERE tweet_id = ?
                    AND user_id IN
                      (SELECT following_user_id FROM follower WHERE follower_user_id = ?))"#,
        )
        .bind(tweet_id)
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn replies(&self, tweet_id: i64, viewer_id: i64) -> anyhow::Result<Vec<ReplyRow>> {
        let rows = sqlx::query(
            r#"SELECT user.name, reply.reply
               FROM reply JOIN user ON reply.user_id = user.user_id
               WHERE reply.tweet_id = ?
                 AND reply.user_id IN
                   (SELECT following_user_id FROM follower WHERE follower_user_id = ?)"#,
        )
        .bind(tweet_id)
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| ReplyRow {
                name: r.get("name"),
                reply: r.get("reply"),
            })
            .collect())
    }
}
