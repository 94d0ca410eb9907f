// Route exports
pub mod ml;

use actix_web::{middleware::ErrorHandlers, http::StatusCode, web};
use crate::error::{handle_json_payload_error, not_found, render_internal_error};

pub use ml::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(ml::configure);
}

/// JSON extractor config that turns payload failures into structured errors
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Error handler middleware for otherwise unstructured 500s
pub fn internal_error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, render_internal_error::<B>)
}

/// Default service for unknown routes
pub fn default_service() -> actix_web::Route {
    web::route().to(not_found)
}
