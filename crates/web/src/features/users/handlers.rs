use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{error::WebError, middleware::session::CurrentUser, state::AppState};

use super::services;

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created; use the id as X-User-Id", body = UserResponse),
        (status = 400, description = "Invalid input")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    let request = request.normalized();
    request.validate()?;

    let user = services::create_user(state.db.pool(), &request).await?;
    tracing::info!("Created user {}", user.id);

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Missing or unknown session")
    ),
    tag = "users",
    security(("user_session" = []))
)]
pub async fn get_current_user(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Response {
    Json(UserResponse::from(user)).into_response()
}

#[utoipa::path(
    put,
    path = "/api/users/me",
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Missing or unknown session")
    ),
    tag = "users",
    security(("user_session" = []))
)]
pub async fn update_current_user(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Response, WebError> {
    let request = request.normalized();
    request.validate()?;

    let user = services::update_user(state.db.pool(), user.id, &request).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let user = services::get_user(state.db.pool(), id).await?;

    Ok(Json(UserResponse::from(user)).into_response())
}
