use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::leaderboard::LeaderboardView;

use crate::{error::WebError, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    responses(
        (status = 200, description = "Users ranked by total score, or the empty state", body = LeaderboardView)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<Response, WebError> {
    let leaderboard = services::get_leaderboard(state.db.pool()).await?;

    Ok(Json(leaderboard).into_response())
}
