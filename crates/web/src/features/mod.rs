use axum::Router;

use crate::state::AppState;

pub mod criteria;
pub mod entries;
pub mod feed;
pub mod leaderboard;
pub mod users;

pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/criteria", criteria::routes::routes())
        .nest("/entries", entries::routes::routes(state.clone()))
        .nest("/feed", feed::routes::routes())
        .nest("/leaderboard", leaderboard::routes::routes())
        .nest("/users", users::routes::routes(state))
}
