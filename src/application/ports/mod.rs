pub mod engagement_repository;
pub mod social_graph_repository;
pub mod tweet_repository;
pub mod user_repository;
