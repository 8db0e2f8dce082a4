use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use super::get_recipe::RecipeData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::recipe::models::RecipeCommand;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_recipe(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    body: Result<Json<RecipeRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<RecipeData>, ApiError> {
    let Json(body) = body?;

    let recipe = state
        .recipe_service
        .create_recipe(body.into_command())
        .await
        .map_err(ApiError::from)?;

    tracing::info!(recipe_id = %recipe.id, username = %caller.username, "Recipe created");
    Ok(ApiSuccess::new(StatusCode::OK, (&recipe).into()))
}

/// Editable recipe fields; missing fields default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeRequestBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: Vec<String>,
}

impl RecipeRequestBody {
    pub fn into_command(self) -> RecipeCommand {
        RecipeCommand {
            name: self.name,
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}
