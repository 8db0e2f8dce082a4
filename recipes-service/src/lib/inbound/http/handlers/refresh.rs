use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::sign_in::TokenResponseData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::token_from_headers;
use crate::inbound::http::router::AppState;

pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<TokenResponseData>, ApiError> {
    let token = token_from_headers(&headers)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    state
        .user_service
        .refresh(token)
        .await
        .map_err(ApiError::from)
        .map(|issued| ApiSuccess::new(StatusCode::OK, issued.into()))
}
