use axum::{
    middleware,
    routing::get,
    Router,
};
use persistence::{EventLogStore, LogAccessor};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, trace_id};
use crate::routes::{entries, health, reports};

/// Shared request state. The store handle is created once at startup and
/// travels here; there is no global connection.
#[derive(Clone)]
pub struct AppState {
    pub accessor: LogAccessor,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, store: Arc<dyn EventLogStore>) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        accessor: LogAccessor::new(store),
        config: config.clone(),
    };

    let cors = if config.server.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .server
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let ledger_routes = Router::new()
        .route(
            "/api/v1/entries",
            get(entries::list_entries).post(entries::submit_entry),
        )
        .route("/api/v1/reports/unreturned", get(reports::unreturned))
        .route("/api/v1/reports/outstanding", get(reports::outstanding));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(ledger_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
