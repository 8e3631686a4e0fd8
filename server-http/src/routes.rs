use crate::handlers;
use crate::middleware::{require_session, require_session_api};
use crate::state::AppState;
use axum::{
    http::HeaderValue,
    middleware,
    routing::{get, post, put},
    Router,
};
use shared::config::Config;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Build and configure the application router
pub fn build_router(state: AppState, config: &Config) -> Router {
    // Open routes: authentication entry points and liveness
    let public = Router::new()
        .route("/auth/login", post(handlers::login))
        .route("/auth/register", post(handlers::register))
        .route("/auth/logout", post(handlers::logout))
        .route("/login", get(handlers::login_entry))
        .route("/health", get(handlers::health_check));

    // Browser-facing routes: anonymous callers are redirected to /login
    let pages = Router::new()
        .route("/", get(handlers::dashboard))
        .route(
            "/bookmarks",
            get(handlers::list_bookmarks)
                .post(handlers::create_bookmark)
                .delete(handlers::delete_bookmarks),
        )
        .route(
            "/bookmarks/{id}",
            put(handlers::update_bookmark).delete(handlers::delete_bookmark),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // API routes: anonymous callers get 401 JSON
    let api = Router::new()
        .route("/api/bookmarks", get(handlers::search_bookmarks))
        .route("/api/bookmarks/{id}", get(handlers::get_bookmark))
        .route("/me", get(handlers::me))
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::update_settings),
        )
        .route("/settings/wallpaper", put(handlers::update_wallpaper))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session_api,
        ));

    Router::new()
        .merge(public)
        .merge(pages)
        .merge(api)
        // Middleware
        .layer(cors_layer(config))
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.allowed_origins.iter().any(|origin| origin == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
