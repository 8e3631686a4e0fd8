use super::models::UserSnapshot;
use std::time::{SystemTime, UNIX_EPOCH};

/// Session token type - a secure random string
pub type SessionToken = String;

/// Get current timestamp in milliseconds since Unix epoch
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64
}

/// Server-held record of an authenticated actor, referenced by the opaque
/// token the client carries in its cookie.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: SessionToken,
    pub user: UserSnapshot,
    pub created_at: u64,     // UTC timestamp in milliseconds
    pub expires_at: u64,     // UTC timestamp in milliseconds
    pub last_accessed: u64,  // UTC timestamp in milliseconds
    ttl_ms: u64,
}

impl Session {
    /// Create a new session with the given token, user snapshot, and TTL
    pub fn new(token: SessionToken, user: UserSnapshot, ttl_ms: u64) -> Self {
        let now = current_timestamp_ms();

        Self {
            token,
            user,
            created_at: now,
            expires_at: now + ttl_ms,
            last_accessed: now,
            ttl_ms,
        }
    }

    /// Check if this session has expired
    pub fn is_expired(&self) -> bool {
        let now = current_timestamp_ms();
        now >= self.expires_at
    }

    /// Record an access: expiry slides to a full TTL from now, so the
    /// session dies a fixed interval after its last use, not its creation.
    pub fn touch(&mut self) {
        let now = current_timestamp_ms();
        self.last_accessed = now;
        self.expires_at = now + self.ttl_ms;
    }

    /// Get remaining time to live in milliseconds
    pub fn remaining_ttl_ms(&self) -> u64 {
        let now = current_timestamp_ms();

        if now >= self.expires_at {
            0
        } else {
            self.expires_at - now
        }
    }
}

/// Generate a cryptographically secure random session token
pub fn generate_session_token() -> SessionToken {
    use rand::Rng;

    // Generate 32 random bytes and encode as hex (64 characters)
    let mut rng = rand::rng();
    let bytes: Vec<u8> = (0..32).map(|_| rng.random()).collect();

    // Convert to hex string
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::models::{Role, User};

    fn snapshot(username: &str) -> UserSnapshot {
        let user = User::new(username.to_string(), "hash".to_string(), Role::User);
        UserSnapshot::from(&user)
    }

    #[test]
    fn test_generate_session_token() {
        let token1 = generate_session_token();
        let token2 = generate_session_token();

        // Should be 64 characters (32 bytes as hex)
        assert_eq!(token1.len(), 64);
        assert_eq!(token2.len(), 64);

        // Should be different
        assert_ne!(token1, token2);

        // Should be valid hex
        assert!(token1.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(token2.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_session_creation() {
        let ttl_ms = 3600000; // 1 hour
        let session = Session::new("test_token_123".to_string(), snapshot("alice"), ttl_ms);

        assert_eq!(session.token, "test_token_123");
        assert_eq!(session.user.username, "alice");
        assert!(!session.is_expired());
        assert!(session.remaining_ttl_ms() > 0);
    }

    #[test]
    fn test_session_expiration() {
        let ttl_ms = 0; // Already expired
        let session = Session::new("test_token_123".to_string(), snapshot("alice"), ttl_ms);

        assert!(session.is_expired());
        assert_eq!(session.remaining_ttl_ms(), 0);
    }

    #[test]
    fn test_touch_slides_expiry() {
        let mut session = Session::new("test_token_123".to_string(), snapshot("alice"), 5000);
        let first_expiry = session.expires_at;

        session.touch();

        assert!(session.expires_at >= first_expiry);
        assert!(session.last_accessed >= session.created_at);
        let remaining = session.remaining_ttl_ms();
        assert!(remaining > 4000 && remaining <= 5000);
    }
}
