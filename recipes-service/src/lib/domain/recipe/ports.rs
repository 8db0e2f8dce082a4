use async_trait::async_trait;

use crate::domain::recipe::models::Recipe;
use crate::domain::recipe::models::RecipeCommand;
use crate::domain::recipe::models::RecipeId;
use crate::recipe::errors::CacheError;
use crate::recipe::errors::RecipeError;

/// Port for recipe domain service operations.
#[async_trait]
pub trait RecipeServicePort: Send + Sync + 'static {
    /// List every recipe, served from the cache when it is warm.
    ///
    /// # Errors
    /// * `Cache` - Cache read failed
    /// * `DatabaseError` - Database operation failed
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RecipeError>;

    /// Publish a new recipe and invalidate the cached listing.
    async fn create_recipe(&self, command: RecipeCommand) -> Result<Recipe, RecipeError>;

    /// Recipes carrying the given tag.
    async fn search_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError>;

    /// Retrieve recipe by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Recipe does not exist
    async fn get_recipe(&self, id: &RecipeId) -> Result<Recipe, RecipeError>;

    /// Replace the editable fields of a recipe and invalidate the cached listing.
    ///
    /// # Errors
    /// * `NotFound` - Recipe does not exist
    async fn update_recipe(&self, id: &RecipeId, command: RecipeCommand)
        -> Result<(), RecipeError>;

    /// Delete a recipe.
    ///
    /// # Returns
    /// Whether a recipe was deleted
    async fn delete_recipe(&self, id: &RecipeId) -> Result<bool, RecipeError>;
}

/// Persistence operations for recipes.
#[async_trait]
pub trait RecipeRepository: Send + Sync + 'static {
    async fn create(&self, recipe: Recipe) -> Result<Recipe, RecipeError>;

    async fn list_all(&self) -> Result<Vec<Recipe>, RecipeError>;

    async fn find_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError>;

    async fn find_by_id(&self, id: &RecipeId) -> Result<Option<Recipe>, RecipeError>;

    /// Replace editable fields.
    ///
    /// # Returns
    /// Whether a recipe matched
    async fn update(&self, id: &RecipeId, command: RecipeCommand) -> Result<bool, RecipeError>;

    /// # Returns
    /// Whether a recipe was deleted
    async fn delete(&self, id: &RecipeId) -> Result<bool, RecipeError>;
}

/// Read-through cache for the full recipe listing.
#[async_trait]
pub trait RecipeCache: Send + Sync + 'static {
    /// Cached listing, `None` on a miss.
    async fn get_recipes(&self) -> Result<Option<Vec<Recipe>>, CacheError>;

    async fn set_recipes(&self, recipes: &[Recipe]) -> Result<(), CacheError>;

    async fn clear(&self) -> Result<(), CacheError>;
}
