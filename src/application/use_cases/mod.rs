pub mod auth;
pub mod feed;
pub mod tweets;
