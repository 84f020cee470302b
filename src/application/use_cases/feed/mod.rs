pub mod feed_tweets;
pub mod followers;
pub mod following;
pub mod likes_of;
pub mod own_tweets;
pub mod replies_of;
pub mod tweet_by_id;
