use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use redis::Client;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::recipe::models::Recipe;
use crate::domain::recipe::models::RecipeId;
use crate::domain::recipe::ports::RecipeCache;
use crate::recipe::errors::CacheError;

/// Key holding the JSON-encoded recipe listing.
pub const RECIPES_KEY: &str = "recipes";

/// Redis-backed cache for the recipe listing.
#[derive(Clone)]
pub struct RedisRecipeCache {
    connection: ConnectionManager,
}

impl RedisRecipeCache {
    /// Connect to Redis and build a reconnecting connection manager.
    ///
    /// # Errors
    /// * `ConnectionFailed` - URL is invalid or the server is unreachable
    pub async fn connect(redis_url: &str) -> Result<Self, CacheError> {
        let client =
            Client::open(redis_url).map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;
        let connection = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        Ok(Self { connection })
    }
}

#[async_trait]
impl RecipeCache for RedisRecipeCache {
    async fn get_recipes(&self) -> Result<Option<Vec<Recipe>>, CacheError> {
        let mut connection = self.connection.clone();
        let payload: Option<String> = connection
            .get(RECIPES_KEY)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))?;

        payload.map(|json| decode_recipes(&json)).transpose()
    }

    async fn set_recipes(&self, recipes: &[Recipe]) -> Result<(), CacheError> {
        let payload = encode_recipes(recipes)?;
        let mut connection = self.connection.clone();
        connection
            .set::<_, _, ()>(RECIPES_KEY, payload)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();
        connection
            .del::<_, ()>(RECIPES_KEY)
            .await
            .map_err(|e| CacheError::ConnectionFailed(e.to_string()))
    }
}

/// Cached wire form of a recipe.
#[derive(Debug, Serialize, Deserialize)]
struct CachedRecipe {
    id: Uuid,
    name: String,
    tags: Vec<String>,
    ingredients: Vec<String>,
    instructions: Vec<String>,
    published_at: DateTime<Utc>,
}

impl From<&Recipe> for CachedRecipe {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.0,
            name: recipe.name.clone(),
            tags: recipe.tags.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            published_at: recipe.published_at,
        }
    }
}

impl From<CachedRecipe> for Recipe {
    fn from(cached: CachedRecipe) -> Self {
        Self {
            id: RecipeId(cached.id),
            name: cached.name,
            tags: cached.tags,
            ingredients: cached.ingredients,
            instructions: cached.instructions,
            published_at: cached.published_at,
        }
    }
}

fn encode_recipes(recipes: &[Recipe]) -> Result<String, CacheError> {
    let cached: Vec<CachedRecipe> = recipes.iter().map(CachedRecipe::from).collect();
    serde_json::to_string(&cached).map_err(|e| CacheError::SerializationFailed(e.to_string()))
}

fn decode_recipes(json: &str) -> Result<Vec<Recipe>, CacheError> {
    serde_json::from_str::<Vec<CachedRecipe>>(json)
        .map(|cached| cached.into_iter().map(Recipe::from).collect())
        .map_err(|e| CacheError::SerializationFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_recipes("not json"),
            Err(CacheError::SerializationFailed(_))
        ));
    }

    #[test]
    fn test_encoded_listing_decodes_to_same_recipes() {
        let recipes = vec![Recipe {
            id: RecipeId::new(),
            name: "Pizza".to_string(),
            tags: vec!["italian".to_string()],
            ingredients: vec!["flour".to_string(), "tomato".to_string()],
            instructions: vec!["bake".to_string()],
            published_at: Utc::now(),
        }];

        let json = encode_recipes(&recipes).unwrap();
        assert_eq!(decode_recipes(&json).unwrap(), recipes);
    }
}
