use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct ReplyRow {
    pub name: String,
    pub reply: String,
}

/// Likes and replies. Read-only on this surface; rows are always filtered
/// to engagement authored by users the viewer follows.
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    async fn liker_names(&self, tweet_id: i64, viewer_id: i64) -> anyhow::Result<Vec<String>>;
    async fn replies(&self, tweet_id: i64, viewer_id: i64) -> anyhow::Result<Vec<ReplyRow>>;
}
