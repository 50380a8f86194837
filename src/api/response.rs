//! Response writer.
//!
//! Every outcome a handler can report is serialized here into one of the
//! two envelopes from [`crate::api::types`]. Each function builds a complete
//! `Response`, so a handler produces its output exactly once.

use axum::{
    body::Body,
    http::{
        header::{CONTENT_TYPE, WWW_AUTHENTICATE},
        HeaderValue, StatusCode,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::api::types::{ErrorEnvelope, SuccessEnvelope};
use crate::logging::HTTP_ACCESS;

pub const SUCCESS: &str = "Success";
pub const CREATED: &str = "Created";
pub const UPDATED: &str = "Updated";
pub const NOT_FOUND: &str = "Not Found";
pub const BAD_REQUEST: &str = "Bad Request";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Error detail sent with every 401. The spelling is part of the wire contract.
pub const UNAUTHORIZED_ERROR: &str = "Unaothorized";

/// Challenge sent by [`authenticate`].
pub const BASIC_REALM: &str = r#"Basic realm="Authorization Required""#;

const APPLICATION_JSON: &str = "application/json";

/// Written when a payload cannot be serialized.
const SERIALIZATION_FALLBACK: &[u8] =
    br#"{"status":false,"code":500,"message":"Internal Server Error","error":"Internal Server Error"}"#;

/// Serialize `payload` as JSON with the given status.
///
/// The body is fully serialized before the response is built. If that
/// fails, a 500 error envelope is returned instead, never a partial body.
pub fn write<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => json_response(status, body),
        Err(e) => {
            tracing::error!(category = HTTP_ACCESS, error = %e, "failed to serialize response body");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                SERIALIZATION_FALLBACK.to_vec(),
            )
        }
    }
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON))],
        Body::from(body),
    )
        .into_response()
}

fn success_envelope(status: StatusCode, message: &str) -> Response {
    write(status, &SuccessEnvelope::new(status.as_u16(), message))
}

fn error_envelope(status: StatusCode, label: &str, detail: &str) -> Response {
    let detail = if detail.is_empty() { label } else { detail };
    write(status, &ErrorEnvelope::new(status.as_u16(), label, detail))
}

/// 200 with `message`, or "Success" when blank.
pub fn success(message: &str) -> Response {
    let message = if message.is_empty() { SUCCESS } else { message };
    success_envelope(StatusCode::OK, message)
}

pub fn created() -> Response {
    success_envelope(StatusCode::CREATED, CREATED)
}

pub fn updated() -> Response {
    success_envelope(StatusCode::OK, UPDATED)
}

/// 204 with no body and no content type.
pub fn no_content() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

pub fn not_found(message: &str) -> Response {
    error_envelope(StatusCode::NOT_FOUND, NOT_FOUND, message)
}

/// 400. The detail is also logged at error level, lower-cased.
pub fn bad_request(message: &str) -> Response {
    let response = error_envelope(StatusCode::BAD_REQUEST, BAD_REQUEST, message);
    log_error(message, BAD_REQUEST);
    response
}

/// 500. The detail is also logged at error level, lower-cased.
pub fn internal_error(message: &str) -> Response {
    let response = error_envelope(
        StatusCode::INTERNAL_SERVER_ERROR,
        INTERNAL_SERVER_ERROR,
        message,
    );
    log_error(message, INTERNAL_SERVER_ERROR);
    response
}

pub fn unauthorized() -> Response {
    error_envelope(StatusCode::UNAUTHORIZED, UNAUTHORIZED, UNAUTHORIZED_ERROR)
}

/// 401 like [`unauthorized`], plus a `WWW-Authenticate` Basic challenge.
pub fn authenticate() -> Response {
    let mut response = unauthorized();
    response
        .headers_mut()
        .insert(WWW_AUTHENTICATE, HeaderValue::from_static(BASIC_REALM));
    response
}

fn log_error(message: &str, label: &str) {
    let message = if message.is_empty() { label } else { message };
    tracing::error!(category = HTTP_ACCESS, "{}", message.to_lowercase());
}
