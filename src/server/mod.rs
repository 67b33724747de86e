//! HTTP surface: one route, CORS for the browser client, request tracing.

pub mod handlers;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::post;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::analyser::Analyser;
use crate::config::Settings;

/// Build the application router around an analyser.
pub fn router(analyser: Arc<dyn Analyser>) -> Router {
    Router::new()
        .route("/analyser", post(handlers::analyse))
        .with_state(analyser)
}

/// CORS for a single browser origin, with credentials.
///
/// Only a matching `Origin` gets `Access-Control-Allow-Origin` back.
/// Credentials rule out wildcard headers, so request headers are mirrored.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(origin)
        .with_context(|| format!("invalid CORS origin: {}", origin))?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Serve until Ctrl+C.
pub async fn run(settings: &Settings, analyser: Arc<dyn Analyser>) -> Result<()> {
    let app = router(analyser)
        .layer(cors_layer(&settings.allowed_origin)?)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(settings.bind)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind))?;
    info!(addr = %settings.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await
        .context("server error")?;
    Ok(())
}
