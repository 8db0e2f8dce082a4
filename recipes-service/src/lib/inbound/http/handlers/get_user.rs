use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::sign_up::UserData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    // A name that cannot be valid cannot belong to anyone.
    let username = Username::new(username.clone())
        .map_err(|_| ApiError::from(UserError::NotFoundByUsername(username)))?;

    state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
