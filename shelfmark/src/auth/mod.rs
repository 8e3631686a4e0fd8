// Public API
pub mod bootstrap;
pub mod error;
pub mod models;
pub mod moka_session_repository;
pub mod password;
pub mod repository;
pub mod service;
pub mod session;
pub mod session_store;
pub mod sled_repository;

// Re-export commonly used types
pub use bootstrap::{ensure_default_admin, OfflineAdmin};
pub use error::AuthError;
pub use models::{Role, User, UserSnapshot};
pub use moka_session_repository::MokaSessionRepository;
pub use repository::{UnavailableUserRepository, UserRepository};
pub use service::AuthService;
pub use session::{current_timestamp_ms, generate_session_token, Session, SessionToken};
pub use session_store::{SessionRepository, SessionStore};
pub use sled_repository::SledUserRepository;
