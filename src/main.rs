use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use chirp_api::bootstrap::app_context::{AppContext, AppServices};
use chirp_api::bootstrap::config::Config;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            chirp_api::presentation::http::auth::register,
            chirp_api::presentation::http::auth::login,
            chirp_api::presentation::http::user::feed,
            chirp_api::presentation::http::user::following,
            chirp_api::presentation::http::user::followers,
            chirp_api::presentation::http::user::list_tweets,
            chirp_api::presentation::http::user::create_tweet,
            chirp_api::presentation::http::tweets::get_tweet,
            chirp_api::presentation::http::tweets::get_likes,
            chirp_api::presentation::http::tweets::get_replies,
            chirp_api::presentation::http::tweets::delete_tweet,
            chirp_api::presentation::http::health::health,
        ),
        components(schemas(
            chirp_api::presentation::http::auth::RegisterRequest,
            chirp_api::presentation::http::auth::LoginRequest,
            chirp_api::presentation::http::auth::LoginResponse,
            chirp_api::presentation::http::user::FeedTweetItem,
            chirp_api::presentation::http::user::NameItem,
            chirp_api::presentation::http::user::OwnTweetItem,
            chirp_api::presentation::http::user::CreateTweetRequest,
            chirp_api::presentation::http::tweets::TweetResponse,
            chirp_api::presentation::http::tweets::LikesResponse,
            chirp_api::presentation::http::tweets::ReplyItem,
            chirp_api::presentation::http::tweets::RepliesResponse,
            chirp_api::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Auth", description = "Registration and login"),
            (name = "Feed", description = "Following-scoped reads"),
            (name = "Tweets", description = "Tweet reads and mutations"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "chirp_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(?cfg, "Starting chirp backend");

    // Database
    let pool = chirp_api::infrastructure::db::connect_pool(&cfg.database_url).await?;
    chirp_api::infrastructure::db::migrate(&pool).await?;

    let user_repo = Arc::new(
        chirp_api::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository::new(
            pool.clone(),
        ),
    );
    let social_graph_repo = Arc::new(
        chirp_api::infrastructure::db::repositories::social_graph_repository_sqlx::SqlxSocialGraphRepository::new(
            pool.clone(),
        ),
    );
    let tweet_repo = Arc::new(
        chirp_api::infrastructure::db::repositories::tweet_repository_sqlx::SqlxTweetRepository::new(
            pool.clone(),
        ),
    );
    let engagement_repo = Arc::new(
        chirp_api::infrastructure::db::repositories::engagement_repository_sqlx::SqlxEngagementRepository::new(
            pool.clone(),
        ),
    );

    let services = AppServices::new(user_repo, social_graph_repo, tweet_repo, engagement_repo);
    let ctx = AppContext::new(cfg.clone(), services);

    // Build CORS
    let cors = if let Some(origin) = cfg.frontend_url.clone() {
        match HeaderValue::from_str(&origin) {
            Ok(v) => CorsLayer::new()
                .allow_origin(v)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::DELETE,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]),
            Err(_) => CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::DELETE,
                    http::Method::OPTIONS,
                ])
                .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]),
        }
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::mirror_request())
            .allow_methods([
                http::Method::GET,
                http::Method::POST,
                http::Method::DELETE,
                http::Method::OPTIONS,
            ])
            .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION])
    };

    let app = chirp_api::presentation::http::app(ctx, pool)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
