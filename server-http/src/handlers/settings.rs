use crate::api::{
    ErrorResponse, SettingsResponse, UpdateSettingsRequest, UpdateWallpaperRequest,
    WallpaperResponse,
};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use shelfmark::auth::UserSnapshot;
use shelfmark::settings::SettingsError;
use tracing::error;

/// GET /settings - the caller's settings, materialized on first access
pub async fn get_settings(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
) -> Response {
    match state.settings.get_or_create(&user.user_id).await {
        Ok(settings) => Json(SettingsResponse::from(settings)).into_response(),
        Err(e) => settings_error_response(e),
    }
}

/// PUT /settings - partial settings update
pub async fn update_settings(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
    Json(req): Json<UpdateSettingsRequest>,
) -> Response {
    match state.settings.update(&user.user_id, req.into()).await {
        Ok(settings) => Json(SettingsResponse::from(settings)).into_response(),
        Err(e) => settings_error_response(e),
    }
}

/// PUT /settings/wallpaper - change just the wallpaper
pub async fn update_wallpaper(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
    Json(req): Json<UpdateWallpaperRequest>,
) -> Response {
    match state
        .settings
        .set_wallpaper(&user.user_id, req.wallpaper)
        .await
    {
        Ok(settings) => Json(WallpaperResponse {
            success: true,
            wallpaper: settings.wallpaper,
        })
        .into_response(),
        Err(e) => settings_error_response(e),
    }
}

pub(crate) fn settings_error_response(err: SettingsError) -> Response {
    let status = match &err {
        SettingsError::Validation(_) => StatusCode::BAD_REQUEST,
        SettingsError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("settings operation failed: {}", err);
        "internal error".to_string()
    } else {
        err.to_string()
    };

    (status, Json(ErrorResponse::new(message))).into_response()
}
