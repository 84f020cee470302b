use axum::Router;

use crate::bootstrap::app_context::AppContext;
use crate::infrastructure::db::DbPool;

pub mod auth;
pub mod health;
pub mod tweets;
pub mod user;

/// The full resource surface, without the CORS/trace/doc layers main adds.
pub fn app(ctx: AppContext, pool: DbPool) -> Router {
    Router::new()
        .merge(auth::routes(ctx.clone()))
        .merge(user::routes(ctx.clone()))
        .merge(tweets::routes(ctx))
        .merge(health::routes(pool))
}
