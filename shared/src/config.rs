use tracing::warn;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub data_dir: String,
    pub admin_username: String,
    pub admin_password: String,
    pub session_ttl_hours: u64,
    pub allowed_origins: Vec<String>,
}

impl Config {
    const DEFAULT_ADMIN_USERNAME: &str = "UEMH-CHAN";
    const DEFAULT_ADMIN_PASSWORD: &str = "041018";
    const DEFAULT_DATA_DIR: &str = "./data";
    const DEFAULT_SESSION_TTL_HOURS: u64 = 24;

    pub fn from_env() -> Self {
        let host = std::env::var("SHELFMARK_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("SHELFMARK_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .unwrap_or(3000);
        let session_ttl_hours = std::env::var("SHELFMARK_SESSION_TTL_HOURS")
            .unwrap_or_else(|_| Self::DEFAULT_SESSION_TTL_HOURS.to_string())
            .parse::<u64>()
            .unwrap_or(Self::DEFAULT_SESSION_TTL_HOURS);
        Self {
            host,
            port,
            data_dir: std::env::var("SHELFMARK_DATA_DIR")
                .unwrap_or_else(|_| Self::DEFAULT_DATA_DIR.to_string()),
            admin_username: std::env::var("SHELFMARK_ADMIN_USERNAME")
                .unwrap_or_else(|_| Self::DEFAULT_ADMIN_USERNAME.to_string()),
            admin_password: std::env::var("SHELFMARK_ADMIN_PASSWORD").unwrap_or_else(|_| {
                warn!("SHELFMARK_ADMIN_PASSWORD not set, using the built-in default password");
                warn!("⚠️  WARNING: Please change the default admin password immediately!");
                Self::DEFAULT_ADMIN_PASSWORD.to_string()
            }),
            session_ttl_hours,
            allowed_origins: std::env::var("SHELFMARK_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
        }
    }

    pub fn session_ttl_ms(&self) -> u64 {
        self.session_ttl_hours * 60 * 60 * 1000
    }
}
