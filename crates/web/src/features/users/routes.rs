use axum::{
    Router, middleware,
    routing::{get, post},
};

use super::handlers::{create_user, get_current_user, get_user, update_current_user};
use crate::{middleware::session::require_session, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(get_current_user).put(update_current_user))
        .route_layer(middleware::from_fn_with_state(state, require_session));

    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user))
        .merge(protected)
}
