use axum::extract::State;
use axum::http::StatusCode;

use super::get_recipe::RecipeData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RecipeData>>, ApiError> {
    state
        .recipe_service
        .list_recipes()
        .await
        .map_err(ApiError::from)
        .map(|recipes| ApiSuccess::new(StatusCode::OK, recipes.iter().map(RecipeData::from).collect()))
}
