// src/bin/api_server.rs

use microservice_core::infra::{config, logging};
use microservice_core::transport;
use microservice_core::{EnvelopeBuilder, ErrorResponder, ServiceInfo};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    config::load_dotenv();
    logging::init();

    let service_info = ServiceInfo::from_env();
    tracing::info!(
        service = service_info.service_name.as_deref().unwrap_or("<unnamed>"),
        version = service_info.service_version.as_deref().unwrap_or("<unversioned>"),
        "starting service"
    );

    let responder =
        ErrorResponder::new(EnvelopeBuilder::new()).with_redaction(config::redact_internal_errors());
    let app_state = transport::http::AppState::new(service_info).with_responder(responder);

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state, transport::http::ServiceRoutes::new())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);

    let addr = config::listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
