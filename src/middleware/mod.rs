//! Middleware del sistema
//!
//! CORS y trazado de requests HTTP.

pub mod cors;

pub use cors::cors_layer;

use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;

/// Capa de tracing por request (un span por request HTTP)
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
}
