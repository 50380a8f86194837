//! Request middleware for axum: access logging and method-mismatch envelopes.

use axum::{
    extract::{OriginalUri, Request},
    http::{header::CONTENT_TYPE, StatusCode, Uri},
    middleware::Next,
    response::Response,
};

use crate::api::handlers::route_not_found;
use crate::logging::HTTP_ACCESS;

/// URI that is served but never access-logged.
pub const FAVICON_PATH: &str = "/favicon.ico";

/// Log method and URI of every request except the favicon, then pass it on.
pub async fn access_log(request: Request, next: Next) -> Response {
    let uri = request_uri(original_uri(&request));
    if uri != FAVICON_PATH {
        tracing::info!(
            category = HTTP_ACCESS,
            "access method {} at URI {}",
            request.method(),
            uri
        );
    }

    next.run(request).await
}

/// Turn the router's bare 405 for a known path into the not-found envelope.
pub async fn envelope_method_mismatch(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = original_uri(&request).clone();

    let response = next.run(request).await;
    if response.status() == StatusCode::METHOD_NOT_ALLOWED
        && !response.headers().contains_key(CONTENT_TYPE)
    {
        return route_not_found(&method, &uri);
    }

    response
}

/// URI as received, before any base-path stripping by nested routers.
fn original_uri(request: &Request) -> &Uri {
    request
        .extensions()
        .get::<OriginalUri>()
        .map_or_else(|| request.uri(), |original| &original.0)
}

/// Path plus query, as sent on the request line.
pub fn request_uri(uri: &Uri) -> &str {
    uri.path_and_query()
        .map_or_else(|| uri.path(), |pq| pq.as_str())
}
