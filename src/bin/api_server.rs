use produtos_api::infra::logging::setup_tracing;
use produtos_api::transport;
use produtos_api::AppConfig;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    setup_tracing();

    // Each process starts with an empty catalog; nothing is persisted.
    let app_state = transport::http::AppState::new();

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state.clone())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("API rodando em http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            let discarded = app_state.catalog.read().await.store().len();
            tracing::info!(discarded, "shutdown signal received, in-memory catalog dropped");
        }
    }

    Ok(())
}
