use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::MessageData;
use crate::domain::recipe::models::RecipeId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_recipe(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(recipe_id): Path<String>,
) -> Result<ApiSuccess<MessageData>, ApiError> {
    // An unparseable id cannot match anything.
    let deleted = match RecipeId::from_string(&recipe_id) {
        Ok(ref recipe_id) => state
            .recipe_service
            .delete_recipe(recipe_id)
            .await
            .map_err(ApiError::from)?,
        Err(_) => false,
    };

    let message = if deleted {
        tracing::info!(recipe_id = %recipe_id, username = %caller.username, "Recipe deleted");
        "Recipe has been deleted"
    } else {
        "No recipes have been deleted"
    };

    Ok(ApiSuccess::new(StatusCode::OK, MessageData::new(message)))
}
