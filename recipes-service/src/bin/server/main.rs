use std::sync::Arc;

use auth::Authenticator;
use recipes_service::config::Config;
use recipes_service::domain::recipe::service::RecipeService;
use recipes_service::domain::user::service::UserService;
use recipes_service::inbound::http::router::create_router;
use recipes_service::outbound::cache::RedisRecipeCache;
use recipes_service::outbound::repositories::PostgresRecipeRepository;
use recipes_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recipes_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "recipes-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
        e
    })?;

    tracing::info!(
        http_port = config.server.http_port,
        redis_url = %config.redis.url,
        "Configuration loaded"
    );

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes())?);

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let recipe_cache = Arc::new(RedisRecipeCache::connect(&config.redis.url).await?);
    tracing::info!(cache = "redis", "Cache connection established");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let recipe_repository = Arc::new(PostgresRecipeRepository::new(pg_pool));

    let user_service = Arc::new(UserService::new(
        user_repository,
        Arc::clone(&authenticator),
    ));
    let recipe_service = Arc::new(RecipeService::new(recipe_repository, recipe_cache));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, recipe_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");
    Ok(())
}
