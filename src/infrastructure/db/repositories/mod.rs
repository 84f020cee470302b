pub mod engagement_repository_sqlx;
pub mod social_graph_repository_sqlx;
pub mod tweet_repository_sqlx;
pub mod user_repository_sqlx;
