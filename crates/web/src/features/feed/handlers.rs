use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::feed::FeedView;

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/feed",
    responses(
        (status = 200, description = "Entries newest first, or the empty state", body = FeedView)
    ),
    tag = "feed"
)]
pub async fn get_feed(State(state): State<AppState>) -> Result<Response, WebError> {
    let feed = services::get_feed(state.db.pool(), &state.dates).await?;

    Ok(Json(feed).into_response())
}
