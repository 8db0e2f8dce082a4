use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordDigest;

/// Authentication coordinator combining password digests and token handling.
///
/// Built once at startup from the configured secret and shared read-only
/// between requests.
pub struct Authenticator {
    password_digest: PasswordDigest,
    jwt_handler: JwtHandler,
}

/// A freshly minted token together with its expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    pub fn new(jwt_secret: &[u8]) -> Result<Self, JwtError> {
        Ok(Self {
            password_digest: PasswordDigest::new(),
            jwt_handler: JwtHandler::new(jwt_secret)?,
        })
    }

    /// Digest a password for storage or lookup.
    pub fn hash_password(&self, password: &str) -> String {
        self.password_digest.digest(password)
    }

    /// Mint a token for `username` expiring `ttl` from now.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, username: &str, ttl: Duration) -> Result<IssuedToken, JwtError> {
        self.issue_token_at(username, Utc::now(), ttl)
    }

    /// Mint a token relative to an explicit issuance time.
    pub fn issue_token_at(
        &self,
        username: &str,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<IssuedToken, JwtError> {
        let claims = Claims::for_user_at(username, issued_at, ttl);
        let token = self.jwt_handler.encode(&claims)?;

        Ok(IssuedToken {
            token,
            expires: claims.expires_at(),
        })
    }

    /// Validate a token and return its claims.
    ///
    /// # Errors
    /// * `InvalidSignature`, `Malformed` or `TokenExpired`
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
