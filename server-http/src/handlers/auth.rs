use crate::api::{
    CurrentUserResponse, ErrorResponse, LoginRequest, LogoutResponse, RegisterRequest,
    SessionResponse,
};
use crate::cookie::{create_logout_cookie, create_session_cookie, session_token_from_headers};
use crate::state::AppState;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Extension, Json,
};
use shelfmark::auth::{AuthError, Session, UserSnapshot};
use tracing::error;

/// POST /auth/login
///
/// Authenticate with username and password. Success sets the session
/// cookie; failure re-uses one uniform message for unknown usernames and
/// wrong passwords alike.
pub async fn login(State(state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    match state.auth_service.login(&req.username, &req.password).await {
        Ok(session) => session_response(&session),
        Err(e) => auth_error_response(e),
    }
}

/// POST /auth/register
///
/// Create an account and log it in immediately.
pub async fn register(State(state): State<AppState>, Json(req): Json<RegisterRequest>) -> Response {
    match state
        .auth_service
        .register(&req.username, &req.password, &req.confirm_password)
        .await
    {
        Ok(session) => (StatusCode::CREATED, session_response_parts(&session)).into_response(),
        Err(e) => auth_error_response(e),
    }
}

/// POST /auth/logout
///
/// Destroys the session and clears the cookie. Always succeeds from the
/// caller's perspective, token or no token.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token_from_headers(&headers) {
        state.auth_service.logout(&token).await;
    }

    (
        [(header::SET_COOKIE, create_logout_cookie())],
        Json(LogoutResponse {
            message: "logged out".to_string(),
        }),
    )
        .into_response()
}

/// GET /login
///
/// The anonymous entry point protected routes redirect to. An already
/// authenticated caller is bounced back to the main view.
pub async fn login_entry(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token_from_headers(&headers) {
        if state.auth_service.authenticate(&token).await.is_some() {
            return Redirect::to("/").into_response();
        }
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new("please log in first")),
    )
        .into_response()
}

/// GET /me - the calling session's identity
pub async fn me(Extension(user): Extension<UserSnapshot>) -> Json<CurrentUserResponse> {
    Json(user.into())
}

fn session_response(session: &Session) -> Response {
    session_response_parts(session).into_response()
}

fn session_response_parts(session: &Session) -> impl IntoResponse {
    let cookie = create_session_cookie(&session.token, session.remaining_ttl_ms() / 1000);
    (
        [(header::SET_COOKIE, cookie)],
        Json(SessionResponse::from(session)),
    )
}

/// Map an auth failure to a response. The message always comes from the
/// error's own Display, which never says whether a username exists.
fn auth_error_response(err: AuthError) -> Response {
    let status = match &err {
        AuthError::InvalidInput | AuthError::Validation(_) => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        AuthError::DuplicateUsername => StatusCode::CONFLICT,
        AuthError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("auth operation failed: {}", err);
        "internal error".to_string()
    } else {
        err.to_string()
    };

    (status, Json(ErrorResponse::new(message))).into_response()
}
