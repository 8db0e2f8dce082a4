use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::recipe::models::Recipe;
use crate::domain::recipe::models::RecipeId;
use crate::inbound::http::router::AppState;

pub async fn get_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<ApiSuccess<RecipeData>, ApiError> {
    let recipe_id =
        RecipeId::from_string(&recipe_id).map_err(|_| ApiError::unknown_recipe(&recipe_id))?;

    state
        .recipe_service
        .get_recipe(&recipe_id)
        .await
        .map_err(ApiError::from)
        .map(|ref recipe| ApiSuccess::new(StatusCode::OK, recipe.into()))
}

/// Recipe as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeData {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

impl From<&Recipe> for RecipeData {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.to_string(),
            name: recipe.name.clone(),
            tags: recipe.tags.clone(),
            ingredients: recipe.ingredients.clone(),
            instructions: recipe.instructions.clone(),
            published_at: recipe.published_at,
        }
    }
}
