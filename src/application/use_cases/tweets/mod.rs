pub mod create_tweet;
pub mod delete_tweet;
