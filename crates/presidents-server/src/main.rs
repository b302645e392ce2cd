use anyhow::Context;
use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::PgPresidentRepository;
use application::PresidentService;
use config::ServerConfig;

/// Application service with the concrete repository implementation
pub type AppPresidentService = PresidentService<PgPresidentRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub president_service: Arc<AppPresidentService>,
    pub config: ServerConfig,
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🏛️  Presidents API initializing...");

    let config = ServerConfig::from_secrets(&secrets)?;
    tracing::info!(
        "⚙️  Default page size: {}, permissive CORS: {}",
        config.default_page_size,
        config.cors_permissive
    );

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("✅ Database migrations completed");

    // Initialize application services
    let president_repo = Arc::new(PgPresidentRepository::new(pool));
    let president_service = Arc::new(PresidentService::new(president_repo));

    let cors_permissive = config.cors_permissive;
    let state = AppState {
        president_service,
        config,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    let mut router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .merge(routes::health::router())
        .merge(routes::president::router())
        .layer(TraceLayer::new_for_http());

    if cors_permissive {
        router = router.layer(CorsLayer::permissive());
    } else {
        tracing::warn!("⚠️  CORS_PERMISSIVE=false - cross-origin requests will be rejected");
    }

    let router = router.with_state(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Presidents API ready");

    Ok(router.into())
}
