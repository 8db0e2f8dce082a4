use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use auth::IssuedToken;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::Credentials;
use crate::inbound::http::router::AppState;

pub async fn sign_in(
    State(state): State<AppState>,
    body: Result<Json<SignInRequestBody>, JsonRejection>,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let Json(body) = body?;

    state
        .user_service
        .sign_in(Credentials::new(body.username, body.password))
        .await
        .map_err(ApiError::from)
        .map(|issued| ApiSuccess::new(StatusCode::OK, issued.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInRequestBody {
    username: String,
    password: String,
}

/// `{token, expires}` body shared by sign-in and refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponseData {
    pub token: String,
    pub expires: DateTime<Utc>,
}

impl From<IssuedToken> for TokenResponseData {
    fn from(issued: IssuedToken) -> Self {
        Self {
            token: issued.token,
            expires: issued.expires,
        }
    }
}
