use thiserror::Error;

/// Error for RecipeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecipeIdError {
    #[error("Invalid recipe ID: {0}")]
    InvalidFormat(String),
}

/// Error for recipe cache operations
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    #[error("Cache connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Failed to (de)serialize cached recipes: {0}")]
    SerializationFailed(String),
}

/// Top-level error for all recipe operations
#[derive(Debug, Clone, Error)]
pub enum RecipeError {
    #[error("No match was found for ID {0}")]
    NotFound(String),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
