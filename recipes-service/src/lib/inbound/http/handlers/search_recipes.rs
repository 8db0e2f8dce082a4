use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::get_recipe::RecipeData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn search_recipes(
    State(state): State<AppState>,
    Query(query): Query<SearchRecipesQuery>,
) -> Result<ApiSuccess<Vec<RecipeData>>, ApiError> {
    state
        .recipe_service
        .search_by_tag(&query.tag)
        .await
        .map_err(ApiError::from)
        .map(|recipes| ApiSuccess::new(StatusCode::OK, recipes.iter().map(RecipeData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchRecipesQuery {
    #[serde(default)]
    tag: String,
}
