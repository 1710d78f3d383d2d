use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::Method;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::config::AppConfig;
use crate::controllers::{health, upload};
use crate::services::register_service::ServiceRegister;

pub fn app(config: &AppConfig, services: ServiceRegister) -> Router {
    Router::new()
        .merge(health::router())
        .merge(upload::router(config.max_upload_bytes))
        .with_state(services) // Inject services into handlers as state
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_headers([ACCEPT, CONTENT_TYPE])
                        .allow_origin(cors::Any),
                ),
        )
}

pub async fn serve(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let services = ServiceRegister::new(config.clone());
    let app = app(&config, services);

    let addr = config
        .bind_addr
        .parse::<SocketAddr>()
        .with_context(|| format!("Invalid bind address {}", config.bind_addr))?;

    info!("Starting server at {} (parser: {})", addr, config.parser_url);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .context("Error starting server")
}
