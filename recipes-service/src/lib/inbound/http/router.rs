use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_recipe::create_recipe;
use super::handlers::delete_recipe::delete_recipe;
use super::handlers::get_recipe::get_recipe;
use super::handlers::get_user::get_user;
use super::handlers::list_recipes::list_recipes;
use super::handlers::refresh::refresh;
use super::handlers::search_recipes::search_recipes;
use super::handlers::sign_in::sign_in;
use super::handlers::sign_up::sign_up;
use super::handlers::update_recipe::update_recipe;
use super::middleware::authorize;
use crate::domain::recipe::ports::RecipeServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub recipe_service: Arc<dyn RecipeServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    recipe_service: Arc<dyn RecipeServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        recipe_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/signin", post(sign_in))
        .route("/signup", post(sign_up))
        .route("/refresh", post(refresh))
        .route("/recipes", get(list_recipes));

    let protected_routes = Router::new()
        .route("/recipes", post(create_recipe))
        .route("/recipes/search", get(search_recipes))
        .route(
            "/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/user/:username", get(get_user))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.authenticator),
            authorize,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
