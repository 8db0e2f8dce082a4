use std::sync::Arc;

use auth::Authenticator;
use auth::JwtError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

/// Extension type carrying the authenticated caller to downstream handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Outcome of inspecting a request's credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Admit(AuthenticatedUser),
    Reject(Rejection),
}

/// Why a request was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    MissingToken,
    InvalidToken(JwtError),
}

/// Decide whether a request may reach a protected handler.
pub fn evaluate(authenticator: &Authenticator, headers: &HeaderMap) -> GateDecision {
    let Some(token) = token_from_headers(headers) else {
        return GateDecision::Reject(Rejection::MissingToken);
    };

    match authenticator.validate_token(token) {
        Ok(claims) => GateDecision::Admit(AuthenticatedUser {
            username: claims.username,
        }),
        Err(e) => GateDecision::Reject(Rejection::InvalidToken(e)),
    }
}

/// Middleware guarding the protected route group.
///
/// A rejection ends the request with an empty 401; the handler never runs.
pub async fn authorize(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Response {
    match evaluate(&authenticator, req.headers()) {
        GateDecision::Reject(rejection) => {
            tracing::warn!(
                method = %req.method(),
                uri = %req.uri(),
                reason = ?rejection,
                "Request rejected by authorization gate"
            );
            StatusCode::UNAUTHORIZED.into_response()
        }
        GateDecision::Admit(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
    }
}

/// Token from the `Authorization` header, raw or with a `Bearer ` prefix.
pub fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();

    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
