use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::error::ServiceError;
use crate::application::ports::tweet_repository::{FeedTweetRow, TweetStatsRow};
use crate::application::use_cases::feed::feed_tweets::FeedTweets;
use crate::application::use_cases::feed::followers::Followers;
use crate::application::use_cases::feed::following::Following;
use crate::application::use_cases::feed::own_tweets::OwnTweets;
use crate::application::use_cases::tweets::create_tweet::CreateTweet;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{Bearer, current_user};

#[derive(Debug, Serialize, ToSchema)]
pub struct FeedTweetItem {
    pub username: String,
    pub tweet: String,
    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
}

impl From<FeedTweetRow> for FeedTweetItem {
    fn from(r: FeedTweetRow) -> Self {
        FeedTweetItem {
            username: r.username,
            tweet: r.tweet,
            date_time: r.date_time,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NameItem {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OwnTweetItem {
    pub tweet: String,
    pub likes: i64,
    pub replies: i64,
    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
}

impl From<TweetStatsRow> for OwnTweetItem {
    fn from(r: TweetStatsRow) -> Self {
        OwnTweetItem {
            tweet: r.tweet,
            likes: r.likes,
            replies: r.replies,
            date_time: r.date_time,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTweetRequest {
    pub tweet: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/user/tweets/feed/", get(feed))
        .route("/user/following/", get(following))
        .route("/user/followers/", get(followers))
        .route("/user/tweets/", get(list_tweets).post(create_tweet))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/user/tweets/feed/", tag = "Feed", responses(
    (status = 200, body = [FeedTweetItem]),
    (status = 401, description = "Invalid JWT Token")
))]
pub async fn feed(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<Vec<FeedTweetItem>>, ServiceError> {
    let user_id = current_user(&ctx, bearer).await?;
    let repo = ctx.tweet_repo();
    let uc = FeedTweets {
        repo: repo.as_ref(),
    };
    let rows = uc.execute(user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/user/following/", tag = "Feed", responses(
    (status = 200, body = [NameItem])
))]
pub async fn following(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<Vec<NameItem>>, ServiceError> {
    let user_id = current_user(&ctx, bearer).await?;
    let repo = ctx.social_graph_repo();
    let uc = Following {
        repo: repo.as_ref(),
    };
    let names = uc.execute(user_id).await?;
    Ok(Json(names.into_iter().map(|name| NameItem { name }).collect()))
}

#[utoipa::path(get, path = "/user/followers/", tag = "Feed", responses(
    (status = 200, body = [NameItem])
))]
pub async fn followers(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<Vec<NameItem>>, ServiceError> {
    let user_id = current_user(&ctx, bearer).await?;
    let repo = ctx.social_graph_repo();
    let uc = Followers {
        repo: repo.as_ref(),
    };
    let names = uc.execute(user_id).await?;
    Ok(Json(names.into_iter().map(|name| NameItem { name }).collect()))
}

#[utoipa::path(get, path = "/user/tweets/", tag = "Tweets", responses(
    (status = 200, body = [OwnTweetItem])
))]
pub async fn list_tweets(
    State(ctx): State<AppContext>,
    bearer: Bearer,
) -> Result<Json<Vec<OwnTweetItem>>, ServiceError> {
    let user_id = current_user(&ctx, bearer).await?;
    let repo = ctx.tweet_repo();
    let uc = OwnTweets {
        repo: repo.as_ref(),
    };
    let rows = uc.execute(user_id).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(post, path = "/user/tweets/", tag = "Tweets", request_body = CreateTweetRequest, responses(
    (status = 200, body = String)
))]
pub async fn create_tweet(
    State(ctx): State<AppContext>,
    bearer: Bearer,
    Json(req): Json<CreateTweetRequest>,
) -> Result<&'static str, ServiceError> {
    let user_id = current_user(&ctx, bearer).await?;
    let repo = ctx.tweet_repo();
    let uc = CreateTweet {
        repo: repo.as_ref(),
    };
    uc.execute(user_id, &req.tweet).await?;
    Ok("Created a Tweet")
}
