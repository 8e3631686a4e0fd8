use crate::api::ErrorResponse;
use crate::cookie::session_token_from_headers;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use shelfmark::auth::UserSnapshot;

/// Session middleware for browser-facing routes.
///
/// A valid session cookie attaches the caller's [`UserSnapshot`] to the
/// request; anonymous callers are redirected to the login entry point.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    match resolve_user(&state, request.headers()).await {
        Some(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        None => Err(Redirect::to("/login").into_response()),
    }
}

/// Session middleware for API routes: anonymous callers get 401 JSON
/// instead of a redirect.
pub async fn require_session_api(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    match resolve_user(&state, request.headers()).await {
        Some(user) => {
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        None => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("please log in first")),
        )
            .into_response()),
    }
}

async fn resolve_user(state: &AppState, headers: &HeaderMap) -> Option<UserSnapshot> {
    let token = session_token_from_headers(headers)?;
    state.auth_service.authenticate(&token).await
}
