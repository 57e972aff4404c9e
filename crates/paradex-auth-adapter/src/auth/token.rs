/*
[INPUT]:  Session tokens and expiration timestamps
[OUTPUT]: Token retrieval and expiration status
[POS]:    Auth layer - token lifecycle management
[UPDATE]: When adding token refresh or changing storage strategy
*/

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};

/// The signed expiration claim requested for each token
pub const TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// Practical usable window. The remote signs a one-hour expiration but the
/// token stops being accepted well before that, so callers should
/// re-authenticate once this elapses.
pub const TOKEN_USABLE_SECONDS: i64 = 300;

/// Stored session token with validity metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    /// The expiration claim carried in the signed request, not a usage guarantee
    pub expires_at: DateTime<Utc>,
    /// When to re-authenticate proactively
    pub usable_until: DateTime<Utc>,
}

/// Thread-safe session-token store
#[derive(Debug, Clone)]
pub struct TokenStore {
    data: Arc<RwLock<Option<SessionToken>>>,
}

impl TokenStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
        }
    }

    /// Store a fresh token; `expires_at_unix` is the signed expiration claim
    pub fn set_token(&self, token: String, expires_at_unix: u64) -> SessionToken {
        let issued_at = Utc::now();
        let expires_at = DateTime::from_timestamp(expires_at_unix as i64, 0)
            .unwrap_or(issued_at + Duration::seconds(TOKEN_EXPIRY_SECONDS));
        let usable_until = issued_at + Duration::seconds(TOKEN_USABLE_SECONDS);

        let session = SessionToken {
            token,
            issued_at,
            expires_at,
            usable_until,
        };

        let mut guard = self.data.write().unwrap();
        *guard = Some(session.clone());
        session
    }

    /// Get the current token string if available
    pub fn get_token(&self) -> Option<String> {
        let guard = self.data.read().unwrap();
        guard.as_ref().map(|data| data.token.clone())
    }

    /// Get the full token data if available
    pub fn token_data(&self) -> Option<SessionToken> {
        let guard = self.data.read().unwrap();
        guard.clone()
    }

    /// True once the practical usable window has elapsed (or no token is held)
    pub fn is_expired(&self) -> bool {
        let guard = self.data.read().unwrap();
        match guard.as_ref() {
            Some(data) => Utc::now() > data.usable_until,
            None => true,
        }
    }

    /// Clear the stored token
    pub fn clear(&self) {
        let mut guard = self.data.write().unwrap();
        *guard = None;
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}
