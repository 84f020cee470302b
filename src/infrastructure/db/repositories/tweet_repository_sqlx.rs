use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::Row;

use crate::application::ports::tweet_repository::{
    FeedTweetRow, TweetRepository, TweetRow, TweetStatsRow,
};
use crate::infrastructure::db::DbPool;

pub struct SqlxTweetRepository {
    pub pool: DbPool,
}

impl SqlxTweetRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn tweet_row(r: &sqlx::sqlite::SqliteRow) -> TweetRow {
    TweetRow {
        tweet_id: r.get("tweet_id"),
        tweet: r.get("tweet"),
        user_id: r.get("user_id"),
        date_time: r.get("date_time"),
    }
}

#[async_trait]
impl TweetRepository for SqlxTweetRepository {
    async fn create_tweet(
        &self,
        user_id: i64,
        text: &str,
        date_time: DateTime<Utc>,
    ) -> anyhow::Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"INSERT INTO tweet (tweet, user_id, date_time) VALUES (?, ?, ?)
               RETURNING tweet_id"#,
        )
        .bind(text)
        .bind(user_id)
        .bind(date_time)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn find_by_id(&self, tweet_id: i64) -> anyhow::Result<Option<TweetRow>> {
        let row = sqlx::query(
            r#"SELECT tweet_id, tweet, user_id, date_time FROM tweet WHERE tweet_id = ?"#,
        )
        .bind(tweet_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(tweet_row))
    }

    async fn find_visible(
        &self,
        tweet_id: i64,
        viewer_id: i64,
    ) -> anyhow::Result<Option<TweetRow>> {
        let row = sqlx::query(
            r#"SELECT tweet_id, tweet, user_id, date_time FROM tweet
               WHERE tweet_id = ?
                 AND user_id IN
                   (SELECT following_user_id FROM follower WHERE follower_user_id = ?)"#,
        )
        .bind(tweet_id)
        .bind(viewer_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(tweet_row))
    }

    async fn feed_for(&self, viewer_id: i64, limit: i64) -> anyhow::Result<Vec<FeedTweetRow>> {
        let rows = sqlx::query(
            r#"SELECT user.username, tweet.tweet, tweet.date_time
               FROM tweet JOIN user ON tweet.user_id = user.user_id
               WHERE tweet.user_id IN
                 (SELECT following_user_id FROM follower WHERE follower_user_id = ?)
               ORDER BY tweet.date_time DESC
               LIMIT ?"#,
        )
        .bind(viewer_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| FeedTweetRow {
                username: r.get("username"),
                tweet: r.get("tweet"),
                date_time: r.get("date_time"),
            })
            .collect())
    }

    async fn tweets_with_counts(&self, owner_id: i64) -> anyhow::Result<Vec<TweetStatsRow>> {
        // Correlated count subqueries rather than inner joins, so a tweet
        // with zero likes or zero replies still produces a row.
        let rows = sqlx::query(
            r#"SELECT tweet.tweet,
                      (SELECT COUNT(*) FROM "like" WHERE "like".tweet_id = tweet.tweet_id)
                        AS likes,
                      (SELECT COUNT(*) FROM reply WHERE reply.tweet_id = tweet.tweet_id)
                        AS replies,
                      tweet.date_time
               FROM tweet
               WHERE tweet.user_id = ?
               ORDER BY tweet.date_time DESC"#,
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|r| TweetStatsRow {
                tweet: r.get("tweet"),
                likes: r.get("likes"),
                replies: r.get("replies"),
                date_time: r.get("date_time"),
            })
            .collect())
    }

    async fn delete_tweet(&self, tweet_id: i64) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM tweet WHERE tweet_id = ?")
            .bind(tweet_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::application::error::ServiceError;
    use crate::application::use_cases::feed::feed_tweets::{FEED_LIMIT, FeedTweets};
    use crate::application::use_cases::tweets::delete_tweet::DeleteTweet;
    use crate::infrastructure::db::test_util::memory_pool;

    async fn seed_user(pool: &DbPool, name: &str, username: &str) -> i64 {
        sqlx::query_scalar(
            r#"INSERT INTO user (name, username, password_hash, gender)
               VALUES (?, ?, 'x', 'male') RETURNING user_id"#,
        )
        .bind(name)
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    async fn seed_follow(pool: &DbPool, follower: i64, following: i64) {
        sqlx::query("INSERT INTO follower (follower_user_id, following_user_id) VALUES (?, ?)")
            .bind(follower)
            .bind(following)
            .execute(pool)
            .await
            .unwrap();
    }

    fn at(secs: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, secs).unwrap()
    }

    #[tokio::test]
    async fn visibility_follows_the_social_graph() {
        let pool = memory_pool().await;
        let repo = SqlxTweetRepository::new(pool.clone());
        let alice = seed_user(&pool, "Alice", "alice").await;
        let bob = seed_user(&pool, "Bob", "bob").await;
        seed_follow(&pool, alice, bob).await;

        let id = repo.create_tweet(bob, "hello from bob", at(0)).await.unwrap();

        // Alice follows bob, bob follows nobody
        assert!(repo.find_visible(id, alice).await.unwrap().is_some());
        assert!(repo.find_visible(id, bob).await.unwrap().is_none());
        // Self-visibility is not granted by the graph filter
        let own = repo.create_tweet(alice, "hello from alice", at(1)).await.unwrap();
        assert!(repo.find_visible(own, alice).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn feed_is_capped_and_newest_first() {
        let pool = memory_pool().await;
        let repo = SqlxTweetRepository::new(pool.clone());
        let alice = seed_user(&pool, "Alice", "alice").await;
        let bob = seed_user(&pool, "Bob", "bob").await;
        seed_follow(&pool, alice, bob).await;

        for i in 0..6u32 {
            repo.create_tweet(bob, &format!("tweet {i}"), at(i)).await.unwrap();
        }

        let uc = FeedTweets { repo: &repo };
        let feed = uc.execute(alice).await.unwrap();
        assert_eq!(feed.len(), FEED_LIMIT as usize);
        assert_eq!(feed[0].tweet, "tweet 5");
        assert_eq!(feed[0].username, "bob");
        for pair in feed.windows(2) {
            assert!(pair[0].date_time >= pair[1].date_time);
        }
    }

    #[tokio::test]
    async fn counts_include_zero_engagement_tweets() {
        let pool = memory_pool().await;
        let repo = SqlxTweetRepository::new(pool.clone());
        let alice = seed_user(&pool, "Alice", "alice").await;
        let bob = seed_user(&pool, "Bob", "bob").await;

        let liked = repo.create_tweet(alice, "liked one", at(0)).await.unwrap();
        repo.create_tweet(alice, "quiet one", at(1)).await.unwrap();
        sqlx::query(r#"INSERT INTO "like" (tweet_id, user_id) VALUES (?, ?)"#)
            .bind(liked)
            .bind(bob)
            .execute(&pool)
            .await
            .unwrap();

        let rows = repo.tweets_with_counts(alice).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tweet, "quiet one");
        assert_eq!((rows[0].likes, rows[0].replies), (0, 0));
        assert_eq!(rows[1].tweet, "liked one");
        assert_eq!((rows[1].likes, rows[1].replies), (1, 0));
    }

    #[tokio::test]
    async fn delete_is_gated_on_ownership() {
        let pool = memory_pool().await;
        let repo = SqlxTweetRepository::new(pool.clone());
        let alice = seed_user(&pool, "Alice", "alice").await;
        let bob = seed_user(&pool, "Bob", "bob").await;
        let id = repo.create_tweet(bob, "bob's tweet", at(0)).await.unwrap();

        let uc = DeleteTweet { repo: &repo };
        let err = uc.execute(alice, id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Auth(_)));
        // The row survived
        assert!(repo.find_by_id(id).await.unwrap().is_some());

        uc.execute(bob, id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());

        // Deleting a missing tweet is also a 401-class failure
        let err = uc.execute(bob, id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Auth(_)));
    }
}
