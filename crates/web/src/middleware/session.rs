use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use storage::{error::StorageError, models::User, repository::user::UserRepository};
use uuid::Uuid;

use crate::{error::WebError, state::AppState};

pub const USER_ID_HEADER: &str = "x-user-id";

/// The signed-in user, resolved once per request by [`require_session`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Resolves `X-User-Id` into a [`CurrentUser`] request extension.
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let user_id = session_user_id(req.headers())?;

    let user = match UserRepository::new(state.db.pool()).find_by_id(user_id).await {
        Ok(user) => user,
        Err(StorageError::NotFound) => {
            tracing::warn!("Session header refers to unknown user {}", user_id);
            return Err(WebError::Unauthorized);
        }
        Err(e) => return Err(e.into()),
    };

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}

fn session_user_id(headers: &HeaderMap) -> Result<Uuid, WebError> {
    let value = headers
        .get(USER_ID_HEADER)
        .ok_or(WebError::Unauthorized)?
        .to_str()
        .map_err(|_| WebError::BadRequest("X-User-Id must be a UUID".to_string()))?;

    Uuid::parse_str(value.trim())
        .map_err(|_| WebError::BadRequest("X-User-Id must be a UUID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_missing_header_is_unauthorized() {
        let result = session_user_id(&HeaderMap::new());
        assert!(matches!(result, Err(WebError::Unauthorized)));
    }

    #[test]
    fn test_malformed_header_is_bad_request() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("device-123"));

        assert!(matches!(
            session_user_id(&headers),
            Err(WebError::BadRequest(_))
        ));
    }

    #[test]
    fn test_valid_header() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_ID_HEADER,
            HeaderValue::from_str(&id.to_string()).unwrap(),
        );

        assert_eq!(session_user_id(&headers).unwrap(), id);
    }
}
