use server_http::{routes, AppState};
use shared::config::Config;
use shelfmark::auth::{
    ensure_default_admin, AuthService, MokaSessionRepository, OfflineAdmin, SessionStore,
    SledUserRepository, UnavailableUserRepository, UserRepository,
};
use shelfmark::bookmarks::{
    BookmarkRepository, BookmarkService, SledBookmarkRepository, UnavailableBookmarkRepository,
};
use shelfmark::settings::{
    SettingsRepository, SettingsService, SledSettingsRepository, UnavailableSettingsRepository,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    info!("Starting Shelfmark HTTP server...");

    // Load environment variables from .env file (if exists)
    match dotenvy::dotenv() {
        Ok(_) => info!("Loaded environment variables from .env file"),
        Err(_) => info!("No .env file found, using system environment variables"),
    }

    // Load configuration from environment variables
    let config = Config::from_env();

    let data_dir = std::path::Path::new(&config.data_dir).join(".shelfmark");
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        warn!("Failed to create data directory: {}", e);
    }

    // Open the stores. A store that cannot be opened degrades its own
    // subsystem instead of aborting startup; with the user store down,
    // only the default admin can log in.
    let user_repo: Arc<dyn UserRepository> =
        match SledUserRepository::new(data_dir.join("users.sled")) {
            Ok(repo) => Arc::new(repo),
            Err(e) => {
                warn!("user store unavailable: {}", e);
                warn!("running in offline mode, only the default admin can log in");
                Arc::new(UnavailableUserRepository)
            }
        };
    let bookmark_repo: Arc<dyn BookmarkRepository> =
        match SledBookmarkRepository::new(data_dir.join("bookmarks.sled")) {
            Ok(repo) => Arc::new(repo),
            Err(e) => {
                warn!("bookmark store unavailable: {}", e);
                Arc::new(UnavailableBookmarkRepository)
            }
        };
    let settings_repo: Arc<dyn SettingsRepository> =
        match SledSettingsRepository::new(data_dir.join("settings.sled")) {
            Ok(repo) => Arc::new(repo),
            Err(e) => {
                warn!("settings store unavailable: {}", e);
                Arc::new(UnavailableSettingsRepository)
            }
        };

    // Initialize session store
    info!("Initializing session store...");
    let session_repository = Arc::new(MokaSessionRepository::new(
        None, // No max sessions limit
        Some(Duration::from_secs(config.session_ttl_hours * 3600)),
    ));
    let session_store = Arc::new(SessionStore::new(session_repository));

    let offline_admin = OfflineAdmin::new(&config.admin_username, &config.admin_password)
        .expect("Failed to prepare offline admin identity");

    let auth_service = Arc::new(AuthService::new(
        user_repo.clone(),
        session_store,
        offline_admin,
        config.session_ttl_ms(),
    ));

    // The bootstrap races the first incoming requests and is not a
    // precondition for serving; its failure is logged and swallowed.
    {
        let repo = user_repo.clone();
        let username = config.admin_username.clone();
        let password = config.admin_password.clone();
        tokio::spawn(async move {
            if let Err(e) = ensure_default_admin(repo.as_ref(), &username, &password).await {
                warn!("default admin bootstrap failed: {}", e);
            }
        });
    }

    let bookmarks = Arc::new(BookmarkService::new(bookmark_repo));
    let settings = Arc::new(SettingsService::new(settings_repo));

    // Initialize state
    let state = AppState::new(auth_service, bookmarks, settings);

    // Build router
    let router = routes::build_router(state, &config);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("HTTP server listening on http://{}", addr);

    // Graceful shutdown handler
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("Server shutdown complete");
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            info!("Received terminate signal");
        },
    }

    info!("Shutting down gracefully...");
}
