use axum::{Json, response::IntoResponse};
use storage::dto::criterion::{CriterionResponse, registry};

#[utoipa::path(
    get,
    path = "/api/criteria",
    responses(
        (status = 200, description = "Scoring criteria in display order", body = Vec<CriterionResponse>)
    ),
    tag = "criteria"
)]
pub async fn list_criteria() -> impl IntoResponse {
    Json(registry())
}
