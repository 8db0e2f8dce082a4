//! Authentication utilities library
//!
//! Provides the token and credential primitives used by the recipes service:
//! - Password digests (single-pass SHA-256)
//! - JWT token issuance and validation
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Digest
//! ```
//! use auth::PasswordDigest;
//!
//! let digest = PasswordDigest::new();
//! let stored = digest.digest("my_password");
//! assert_eq!(stored.len(), 64);
//! assert_eq!(digest.digest("my_password"), stored);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{Claims, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let claims = Claims::for_user("alice", Duration::minutes(10));
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.username, "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: digest password
//! let stored = auth.hash_password("password123");
//!
//! // Login: compare digests and issue a token
//! assert_eq!(auth.hash_password("password123"), stored);
//! let issued = auth.issue_token("alice", Duration::minutes(10)).unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&issued.token).unwrap();
//! assert_eq!(claims.username, "alice");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordDigest;
