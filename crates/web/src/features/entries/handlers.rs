use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    dto::{
        entry::{ScorePreviewResponse, UpsertEntryRequest},
        feed::FeedItem,
    },
    models::CriteriaFlags,
    services::{render_entry, score},
};
use validator::Validate;

use crate::{error::WebError, middleware::session::CurrentUser, state::AppState};

use super::services;

#[utoipa::path(
    post,
    path = "/api/entries/score",
    request_body = CriteriaFlags,
    responses(
        (status = 200, description = "Score for the given criteria", body = ScorePreviewResponse)
    ),
    tag = "entries"
)]
pub async fn preview_score(Json(flags): Json<CriteriaFlags>) -> impl IntoResponse {
    Json(ScorePreviewResponse::new(score(&flags)))
}

#[utoipa::path(
    put,
    path = "/api/entries",
    request_body = UpsertEntryRequest,
    responses(
        (status = 200, description = "Entry saved", body = FeedItem),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Missing or unknown session")
    ),
    tag = "entries",
    security(("user_session" = []))
)]
pub async fn upsert_entry(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<UpsertEntryRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    let entry = services::upsert_entry(state.db.pool(), user.id, &request).await?;
    tracing::info!("Saved entry for user {} on {}", user.id, entry.entry_date);

    Ok(Json(render_entry(&entry, &state.dates)).into_response())
}
