use axum::{
    Router, middleware,
    routing::{post, put},
};

use super::handlers::{preview_score, upsert_entry};
use crate::{middleware::session::require_session, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", put(upsert_entry))
        .route_layer(middleware::from_fn_with_state(state, require_session));

    Router::new()
        .route("/score", post(preview_score))
        .merge(protected)
}
