//! Router bootstrap.

use axum::{middleware, routing::get, Router};
use utoipa::OpenApi;

use crate::api::cors::build_cors_layer;
use crate::api::handlers;
use crate::api::middleware::{access_log, envelope_method_mismatch, FAVICON_PATH};
use crate::config::Config;
use crate::error::BootstrapError;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::favicon, handlers::health_check),
    components(schemas(
        crate::api::types::SuccessEnvelope,
        crate::api::types::ErrorEnvelope,
    )),
    tags((name = "system", description = "Built-in service endpoints")),
    info(
        title = "Envelope Router",
        version = "0.1.0",
        description = "HTTP service scaffold with uniform JSON response envelopes",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the service router around the collaborator `routes`.
///
/// `routes` are mounted under the configured base path; the favicon, health
/// and OpenAPI routes and the not-found fallback stay at the root. Requests
/// pass through CORS, then the access log, then the matched handler. A known
/// path hit with an unregistered method gets the same 404 envelope as an
/// unknown path.
///
/// Every call returns an independent router.
pub fn initialize(config: &Config, routes: Router) -> Result<Router, BootstrapError> {
    let cors = build_cors_layer(&config.cors)?;

    let router = Router::new()
        .route(
            FAVICON_PATH,
            get(handlers::favicon).fallback(handlers::not_found),
        )
        .route("/health", get(handlers::health_check))
        .route("/api-docs/openapi.json", get(handlers::openapi_json));

    let router = match config.server.mount_path() {
        Some(path) => {
            tracing::debug!(base_path = %path, "Mounting routes under base path");
            router.nest(&path, routes)
        }
        None => router.merge(routes),
    };

    Ok(router
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(envelope_method_mismatch))
        .layer(middleware::from_fn(access_log))
        .layer(cors))
}
