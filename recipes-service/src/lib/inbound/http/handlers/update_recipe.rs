use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use super::create_recipe::RecipeRequestBody;
use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::recipe::models::RecipeId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_recipe(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(recipe_id): Path<String>,
    body: Result<Json<RecipeRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    let Json(body) = body?;
    let recipe_id =
        RecipeId::from_string(&recipe_id).map_err(|_| ApiError::unknown_recipe(&recipe_id))?;

    state
        .recipe_service
        .update_recipe(&recipe_id, body.into_command())
        .await
        .map_err(ApiError::from)?;

    tracing::info!(recipe_id = %recipe_id, username = %caller.username, "Recipe updated");
    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageData::new("Recipe has been updated"),
    ))
}
