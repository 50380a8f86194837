//! Envelope Router - HTTP service scaffold.
//!
//! Wires an axum router with a configurable CORS policy, per-request access
//! logging, a JSON not-found fallback and a favicon route, and provides the
//! response writer that renders every outcome as a uniform JSON envelope.
//!
//! Services register their own routes on a plain [`axum::Router`] and hand
//! it to [`initialize`]; handlers answer through [`api::response`] or by
//! returning [`ApiResult`].

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

pub use api::{initialize, response};
pub use config::Config;
pub use error::{ApiError, ApiResult, BootstrapError};
