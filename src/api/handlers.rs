//! Built-in HTTP request handlers.

use axum::{
    extract::OriginalUri,
    http::{Method, Uri},
    response::Response,
    Json,
};
use utoipa::OpenApi;

use crate::api::middleware::request_uri;
use crate::api::response;
use crate::api::routes::ApiDoc;
use crate::logging::HTTP_ACCESS;

/// Favicon requests are answered without content.
///
/// GET /favicon.ico
#[utoipa::path(
    get,
    path = "/favicon.ico",
    responses((status = 204, description = "No content")),
    tag = "system"
)]
pub async fn favicon() -> Response {
    response::no_content()
}

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = crate::api::types::SuccessEnvelope)
    ),
    tag = "system"
)]
pub async fn health_check() -> Response {
    response::success("")
}

/// Fallback for any method and path nothing else matched.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    route_not_found(&method, &uri)
}

/// Warn and answer 404 for a method and URI no route accepts.
pub fn route_not_found(method: &Method, uri: &Uri) -> Response {
    let detail = format!("not found method {} at URI {}", method, request_uri(uri));
    tracing::warn!(category = HTTP_ACCESS, "{}", detail);
    response::not_found(&detail)
}

/// OpenAPI document for the built-in routes and the envelope schemas.
///
/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
