pub mod error;
pub mod models;
pub mod repository;
pub mod service;
pub mod sled_repository;

pub use error::SettingsError;
pub use models::{Layout, SettingsPatch, Theme, UserSettings};
pub use repository::{SettingsRepository, UnavailableSettingsRepository};
pub use service::SettingsService;
pub use sled_repository::SledSettingsRepository;
