use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::error::ServiceError;
use crate::application::ports::engagement_repository::ReplyRow;
use crate::application::ports::tweet_repository::TweetRow;
use crate::application::use_cases::feed::likes_of::LikesOf;
use crate::application::use_cases::feed::replies_of::RepliesOf;
use crate::application::use_cases::feed::tweet_by_id::GetTweet;
use crate::application::use_cases::tweets::delete_tweet::DeleteTweet;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{Bearer, current_user};

/// The raw tweet row, field names as stored.
#[derive(Debug, Serialize, ToSchema)]
pub struct TweetResponse {
    pub tweet_id: i64,
    pub tweet: String,
    pub user_id: i64,
    pub date_time: DateTime<Utc>,
}

impl From<TweetRow> for TweetResponse {
    fn from(r: TweetRow) -> Self {
        TweetResponse {
            tweet_id: r.tweet_id,
            tweet: r.tweet,
            user_id: r.user_id,
            date_time: r.date_time,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikesResponse {
    pub likes: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReplyItem {
    pub name: String,
    pub reply: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RepliesResponse {
    pub replies: Vec<ReplyItem>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/tweets/:tweetId/", get(get_tweet).delete(delete_tweet))
        .route("/tweets/:tweetId/likes/", get(get_likes))
        .route("/tweets/:tweetId/replies/", get(get_replies))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/tweets/{tweetId}/", tag = "Tweets",
    params(("tweetId" = i64, Path, description = "Tweet id")),
    responses(
        (status = 200, body = TweetResponse),
        (status = 401, description = "Not visible to the requester")
    ))]
pub async fn get_tweet(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(tweet_id): Path<i64>,
) -> Result<Json<TweetResponse>, ServiceError> {
    let user_id = current_user(&ctx, bearer).await?;
    let repo = ctx.tweet_repo();
    let uc = GetTweet {
        repo: repo.as_ref(),
    };
    let row = uc.execute(user_id, tweet_id).await?;
    Ok(Json(row.into()))
}

#[utoipa::path(get, path = "/tweets/{tweetId}/likes/", tag = "Tweets",
    params(("tweetId" = i64, Path, description = "Tweet id")),
    responses(
        (status = 200, body = LikesResponse),
        (status = 401, description = "Not visible to the requester")
    ))]
pub async fn get_likes(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(tweet_id): Path<i64>,
) -> Result<Json<LikesResponse>, ServiceError> {
    let user_id = current_user(&ctx, bearer).await?;
    let tweets = ctx.tweet_repo();
    let engagement = ctx.engagement_repo();
    let uc = LikesOf {
        tweets: tweets.as_ref(),
        engagement: engagement.as_ref(),
    };
    let likes = uc.execute(user_id, tweet_id).await?;
    Ok(Json(LikesResponse { likes }))
}

#[utoipa::path(get, path = "/tweets/{tweetId}/replies/", tag = "Tweets",
    params(("tweetId" = i64, Path, description = "Tweet id")),
    responses(
        (status = 200, body = RepliesResponse),
        (status = 401, description = "Not visible to the requester")
    ))]
pub async fn get_replies(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(tweet_id): Path<i64>,
) -> Result<Json<RepliesResponse>, ServiceError> {
    let user_id = current_user(&ctx, bearer).await?;
    let tweets = ctx.tweet_repo();
    let engagement = ctx.engagement_repo();
    let uc = RepliesOf {
        tweets: tweets.as_ref(),
        engagement: engagement.as_ref(),
    };
    let replies = uc.execute(user_id, tweet_id).await?;
    Ok(Json(RepliesResponse {
        replies: replies
            .into_iter()
            .map(|ReplyRow { name, reply }| ReplyItem { name, reply })
            .collect(),
    }))
}

#[utoipa::path(delete, path = "/tweets/{tweetId}/", tag = "Tweets",
    params(("tweetId" = i64, Path, description = "Tweet id")),
    responses(
        (status = 200, body = String),
        (status = 401, description = "Not the owner")
    ))]
pub async fn delete_tweet(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Path(tweet_id): Path<i64>,
) -> Result<&'static str, ServiceError> {
    let user_id = current_user(&ctx, bearer).await?;
    let repo = ctx.tweet_repo();
    let uc = DeleteTweet {
        repo: repo.as_ref(),
    };
    uc.execute(user_id, tweet_id).await?;
    Ok("Tweet Removed")
}
