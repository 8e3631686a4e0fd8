use crate::api::{
    BookmarkActionResponse, BookmarkListParams, BookmarkListResponse, BookmarkResponse,
    BookmarksResponse, CreateBookmarkRequest, DashboardResponse, DeleteBookmarksRequest,
    ErrorResponse, UpdateBookmarkRequest,
};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use super::settings::settings_error_response;
use shelfmark::auth::UserSnapshot;
use shelfmark::bookmarks::{BookmarkError, ListQuery};
use tracing::error;

/// GET / - everything the main view needs for the logged-in user
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
) -> Response {
    let bookmarks = match state.bookmarks.list_all(&user.user_id).await {
        Ok(bookmarks) => bookmarks,
        Err(e) => return bookmark_error_response(e),
    };
    let settings = match state.settings.get_or_create(&user.user_id).await {
        Ok(settings) => settings,
        Err(e) => return settings_error_response(e),
    };

    Json(DashboardResponse {
        user: user.into(),
        bookmarks: bookmarks.into_iter().map(Into::into).collect(),
        settings: settings.into(),
    })
    .into_response()
}

/// GET /bookmarks - all of the caller's bookmarks, newest first
pub async fn list_bookmarks(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
) -> Response {
    match state.bookmarks.list_all(&user.user_id).await {
        Ok(bookmarks) => Json(BookmarksResponse {
            bookmarks: bookmarks.into_iter().map(Into::into).collect(),
        })
        .into_response(),
        Err(e) => bookmark_error_response(e),
    }
}

/// POST /bookmarks - create a bookmark
pub async fn create_bookmark(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
    Json(req): Json<CreateBookmarkRequest>,
) -> Response {
    match state.bookmarks.create(&user.user_id, req.into()).await {
        Ok(bookmark) => (
            StatusCode::CREATED,
            Json(BookmarkActionResponse {
                success: true,
                message: "bookmark created".to_string(),
                bookmark: Some(bookmark.into()),
            }),
        )
            .into_response(),
        Err(e) => bookmark_error_response(e),
    }
}

/// PUT /bookmarks/{id} - update an owned bookmark
pub async fn update_bookmark(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
    Path(id): Path<String>,
    Json(req): Json<UpdateBookmarkRequest>,
) -> Response {
    match state.bookmarks.update(&user.user_id, &id, req.into()).await {
        Ok(bookmark) => Json(BookmarkActionResponse {
            success: true,
            message: "bookmark updated".to_string(),
            bookmark: Some(bookmark.into()),
        })
        .into_response(),
        Err(e) => bookmark_error_response(e),
    }
}

/// DELETE /bookmarks/{id} - delete an owned bookmark
pub async fn delete_bookmark(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
    Path(id): Path<String>,
) -> Response {
    match state.bookmarks.delete(&user.user_id, &id).await {
        Ok(()) => Json(BookmarkActionResponse {
            success: true,
            message: "bookmark deleted".to_string(),
            bookmark: None,
        })
        .into_response(),
        Err(e) => bookmark_error_response(e),
    }
}

/// DELETE /bookmarks - delete a batch of owned bookmarks
pub async fn delete_bookmarks(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
    Json(req): Json<DeleteBookmarksRequest>,
) -> Response {
    match state
        .bookmarks
        .delete_many(&user.user_id, &req.bookmark_ids)
        .await
    {
        Ok(deleted) => Json(BookmarkActionResponse {
            success: true,
            message: format!("deleted {} bookmarks", deleted),
            bookmark: None,
        })
        .into_response(),
        Err(e) => bookmark_error_response(e),
    }
}

/// GET /api/bookmarks - paginated listing with optional search
pub async fn search_bookmarks(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
    Query(params): Query<BookmarkListParams>,
) -> Response {
    let query = ListQuery {
        page: params.page,
        limit: params.limit,
        search: params.search,
    };

    match state.bookmarks.list(&user.user_id, query).await {
        Ok(page) => Json(BookmarkListResponse::from(page)).into_response(),
        Err(e) => bookmark_error_response(e),
    }
}

/// GET /api/bookmarks/{id} - fetch a single owned bookmark
pub async fn get_bookmark(
    State(state): State<AppState>,
    Extension(user): Extension<UserSnapshot>,
    Path(id): Path<String>,
) -> Response {
    match state.bookmarks.get(&user.user_id, &id).await {
        Ok(bookmark) => Json(BookmarkResponse::from(bookmark)).into_response(),
        Err(e) => bookmark_error_response(e),
    }
}

fn bookmark_error_response(err: BookmarkError) -> Response {
    let status = match &err {
        BookmarkError::NotFound => StatusCode::NOT_FOUND,
        BookmarkError::Validation(_) => StatusCode::BAD_REQUEST,
        BookmarkError::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!("bookmark operation failed: {}", err);
        "internal error".to_string()
    } else {
        err.to_string()
    };

    (status, Json(ErrorResponse::new(message))).into_response()
}
