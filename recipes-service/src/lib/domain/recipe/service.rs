use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::recipe::models::Recipe;
use crate::domain::recipe::models::RecipeCommand;
use crate::domain::recipe::models::RecipeId;
use crate::recipe::errors::RecipeError;
use crate::recipe::ports::RecipeCache;
use crate::recipe::ports::RecipeRepository;
use crate::recipe::ports::RecipeServicePort;

/// Domain service implementation for recipe operations.
///
/// The full listing is cached aside; every successful write clears it.
pub struct RecipeService<RR, RC>
where
    RR: RecipeRepository,
    RC: RecipeCache,
{
    repository: Arc<RR>,
    cache: Arc<RC>,
}

impl<RR, RC> RecipeService<RR, RC>
where
    RR: RecipeRepository,
    RC: RecipeCache,
{
    /// Create a new recipe service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Recipe persistence implementation
    /// * `cache` - Listing cache implementation
    pub fn new(repository: Arc<RR>, cache: Arc<RC>) -> Self {
        Self { repository, cache }
    }

    async fn invalidate_cache(&self) {
        tracing::debug!("Clearing cached recipe listing");
        if let Err(e) = self.cache.clear().await {
            tracing::error!(error = %e, "Failed to clear cached recipe listing");
        }
    }
}

#[async_trait]
impl<RR, RC> RecipeServicePort for RecipeService<RR, RC>
where
    RR: RecipeRepository,
    RC: RecipeCache,
{
    async fn list_recipes(&self) -> Result<Vec<Recipe>, RecipeError> {
        if let Some(recipes) = self.cache.get_recipes().await? {
            tracing::debug!(count = recipes.len(), source = "cache", "Recipes listed");
            return Ok(recipes);
        }

        let recipes = self.repository.list_all().await?;
        tracing::debug!(count = recipes.len(), source = "database", "Recipes listed");

        if let Err(e) = self.cache.set_recipes(&recipes).await {
            tracing::warn!(error = %e, "Failed to cache recipe listing");
        }

        Ok(recipes)
    }

    async fn create_recipe(&self, command: RecipeCommand) -> Result<Recipe, RecipeError> {
        let recipe = self.repository.create(Recipe::publish(command)).await?;
        self.invalidate_cache().await;
        Ok(recipe)
    }

    async fn search_by_tag(&self, tag: &str) -> Result<Vec<Recipe>, RecipeError> {
        self.repository.find_by_tag(tag).await
    }

    async fn get_recipe(&self, id: &RecipeId) -> Result<Recipe, RecipeError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(RecipeError::NotFound(id.to_string()))
    }

    async fn update_recipe(
        &self,
        id: &RecipeId,
        command: RecipeCommand,
    ) -> Result<(), RecipeError> {
        if !self.repository.update(id, command).await? {
            return Err(RecipeError::NotFound(id.to_string()));
        }
        self.invalidate_cache().await;
        Ok(())
    }

    async fn delete_recipe(&self, id: &RecipeId) -> Result<bool, RecipeError> {
        let deleted = self.repository.delete(id).await?;
        if deleted {
            self.invalidate_cache().await;
        }
        Ok(deleted)
    }
}
