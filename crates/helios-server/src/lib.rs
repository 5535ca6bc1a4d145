//! HTTP surface of the Helios agent core.
//!
//! Builds the Axum router for the fixed API routes and serves it on the
//! configured address (`0.0.0.0:8000` unless overridden). The service is
//! stateless: every response is a pure function of the request path.

pub mod dto;
pub mod handlers;

use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use helios_config::ServerConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Service identifier reported by the health endpoint.
pub const SERVICE_NAME: &str = "helios-agent-core";

/// Human-readable title used in the root greeting.
pub const SERVICE_TITLE: &str = "Helios Agent Core";

/// Version advertised by the root endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds the router for the fixed API surface.
///
/// The root route sits behind request tracing; the health route is merged
/// outside it so liveness probes stay out of the logs. Unmatched paths fall
/// through to axum's default 404.
pub fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
                version = ?req.version(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/", get(handlers::root))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/api/health", get(handlers::health))
        .layer(cors)
}

/// Binds the configured address and serves requests until the process is
/// terminated externally.
///
/// A bind failure (for example, the port is already in use) is returned as
/// an error naming the address; there is no retry.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app()).await?;

    Ok(())
}
