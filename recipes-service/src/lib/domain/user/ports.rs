use async_trait::async_trait;
use auth::IssuedToken;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::user::errors::UserError;
use crate::user::models::Username;

/// Port for the authentication service.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user.
    ///
    /// # Arguments
    /// * `credentials` - Requested username and plaintext password
    ///
    /// # Returns
    /// Stored user record (with the password digest)
    ///
    /// # Errors
    /// * `InvalidUsername` - Username fails validation
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Store operation failed
    async fn sign_up(&self, credentials: Credentials) -> Result<User, UserError>;

    /// Verify credentials and issue a 10-minute token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown user or wrong password (indistinguishable)
    /// * `TokenIssuance` - Token signing failed
    /// * `DatabaseError` - Store operation failed
    async fn sign_in(&self, credentials: Credentials) -> Result<IssuedToken, UserError>;

    /// Exchange a token close to expiry for a fresh 5-minute token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, badly signed or expired
    /// * `RefreshTooEarly` - More than 30 seconds remain before expiry
    /// * `TokenIssuance` - Token signing failed
    async fn refresh(&self, token: &str) -> Result<IssuedToken, UserError>;

    /// Retrieve user by unique username.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Store operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;
}

/// Persistence operations for user records.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist new user to storage.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve user by username.
    ///
    /// # Returns
    /// Optional user (None if not found)
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve the user matching both username and password digest.
    ///
    /// # Returns
    /// Optional user (None if no record matches both)
    async fn find_by_credentials(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<Option<User>, UserError>;
}
