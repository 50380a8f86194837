//! CORS layer construction from [`CorsConfig`].

use std::fmt::Display;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsConfig;
use crate::error::BootstrapError;

const WILDCARD: &str = "*";

/// Build the CORS layer for the configured policy.
///
/// A `*` entry in a list allows anything for that dimension. Anything not
/// listed gets no CORS response headers, so browsers reject it.
pub fn build_cors_layer(config: &CorsConfig) -> Result<CorsLayer, BootstrapError> {
    let origins = config.effective_origins();
    let methods = config.effective_methods();
    let headers = config.effective_headers();

    let mut layer = CorsLayer::new();

    layer = if origins.contains(&WILDCARD) {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parse_all("origin", &origins, HeaderValue::from_str)?)
    };

    layer = if methods.contains(&WILDCARD) {
        layer.allow_methods(Any)
    } else {
        layer.allow_methods(parse_all("method", &methods, |m| {
            Method::from_bytes(m.to_ascii_uppercase().as_bytes())
        })?)
    };

    layer = if headers.contains(&WILDCARD) {
        layer.allow_headers(Any)
    } else {
        layer.allow_headers(parse_all("header", &headers, |h| {
            HeaderName::from_bytes(h.as_bytes())
        })?)
    };

    Ok(layer)
}

fn parse_all<T, E, F>(kind: &'static str, values: &[&str], parse: F) -> Result<Vec<T>, BootstrapError>
where
    E: Display,
    F: Fn(&str) -> Result<T, E>,
{
    values
        .iter()
        .map(|&value| {
            parse(value).map_err(|e| BootstrapError::InvalidCors {
                kind,
                value: value.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
