use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by every issued token.
///
/// Only the principal's username and the expiry are signed; there is no
/// server-side session record, so `exp` is the sole validity criterion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username of the authenticated principal
    pub username: String,

    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `username` - Username to embed in the token
    /// * `ttl` - Time until the token expires
    ///
    /// # Returns
    /// Claims with username and exp set
    pub fn for_user(username: impl ToString, ttl: Duration) -> Self {
        Self::for_user_at(username, Utc::now(), ttl)
    }

    /// Same as [`Claims::for_user`] but relative to an explicit issuance time.
    pub fn for_user_at(username: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            username: username.to_string(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Expiration as a UTC timestamp.
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or_default()
    }

    /// Time left until expiry, negative once expired.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        Duration::seconds(self.exp - now.timestamp())
    }
}
