use std::sync::Arc;

use crate::application::ports::engagement_repository::EngagementRepository;
use crate::application::ports::social_graph_repository::SocialGraphRepository;
use crate::application::ports::tweet_repository::TweetRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    social_graph_repo: Arc<dyn SocialGraphRepository>,
    tweet_repo: Arc<dyn TweetRepository>,
    engagement_repo: Arc<dyn EngagementRepository>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        social_graph_repo: Arc<dyn SocialGraphRepository>,
        tweet_repo: Arc<dyn TweetRepository>,
        engagement_repo: Arc<dyn EngagementRepository>,
    ) -> Self {
        Self {
            user_repo,
            social_graph_repo,
            tweet_repo,
            engagement_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn social_graph_repo(&self) -> Arc<dyn SocialGraphRepository> {
        self.services.social_graph_repo.clone()
    }

    pub fn tweet_repo(&self) -> Arc<dyn TweetRepository> {
        self.services.tweet_repo.clone()
    }

    pub fn engagement_repo(&self) -> Arc<dyn EngagementRepository> {
        self.services.engagement_repo.clone()
    }
}
