//! HTTP layer for Envelope Router.
//!
//! Provides the router bootstrap, the access-log middleware and the
//! response writer used by every handler.

mod cors;
pub mod handlers;
pub mod middleware;
pub mod response;
mod routes;
pub mod types;

pub use cors::build_cors_layer;
pub use routes::{initialize, ApiDoc};
