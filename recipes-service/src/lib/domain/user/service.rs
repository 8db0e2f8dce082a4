use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::IssuedToken;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Lifetime of a token issued by sign-in.
pub const SIGN_IN_TOKEN_TTL_SECONDS: i64 = 10 * 60;

/// Lifetime of a token issued by refresh.
pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 5 * 60;

/// Refresh is only allowed once a token has at most this long left.
pub const REFRESH_WINDOW_SECONDS: i64 = 30;

/// Authentication service.
///
/// Owns sign-up, sign-in and refresh on top of a credential store and the
/// shared [`Authenticator`].
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Token and password digest coordinator
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    /// Refresh relative to an explicit clock reading.
    async fn refresh_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, UserError> {
        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(|e| UserError::InvalidToken(e.to_string()))?;

        let remaining = claims.remaining(now);
        if remaining > Duration::seconds(REFRESH_WINDOW_SECONDS) {
            return Err(UserError::RefreshTooEarly {
                remaining_seconds: remaining.num_seconds(),
            });
        }

        let issued = self
            .authenticator
            .issue_token_at(
                &claims.username,
                now,
                Duration::seconds(REFRESH_TOKEN_TTL_SECONDS),
            )
            .map_err(|e| UserError::TokenIssuance(e.to_string()))?;

        tracing::info!(username = %claims.username, expires = %issued.expires, "Token refreshed");
        Ok(issued)
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn sign_up(&self, credentials: Credentials) -> Result<User, UserError> {
        let username = Username::new(credentials.username)?;

        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(UserError::UsernameAlreadyExists(username.to_string()));
        }

        let user = User {
            username,
            password_hash: self.authenticator.hash_password(&credentials.password),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(username = %created_user.username, "User signed up");

        Ok(created_user)
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<IssuedToken, UserError> {
        // Unknown usernames, malformed usernames and wrong passwords all fail alike.
        let username =
            Username::new(credentials.username).map_err(|_| UserError::InvalidCredentials)?;
        let password_hash = self.authenticator.hash_password(&credentials.password);

        let user = self
            .repository
            .find_by_credentials(&username, &password_hash)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let issued = self
            .authenticator
            .issue_token(
                user.username.as_str(),
                Duration::seconds(SIGN_IN_TOKEN_TTL_SECONDS),
            )
            .map_err(|e| UserError::TokenIssuance(e.to_string()))?;

        tracing::info!(username = %user.username, expires = %issued.expires, "User signed in");
        Ok(issued)
    }

    async fn refresh(&self, token: &str) -> Result<IssuedToken, UserError> {
        self.refresh_at(token, Utc::now()).await
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }
}
