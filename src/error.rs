use actix_web::{
    body::EitherBody,
    dev::ServiceResponse,
    error,
    http::StatusCode,
    middleware::ErrorHandlerResponse,
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::ErrorResponse;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Missing or malformed request fields
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Body could not be read as JSON at all
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation_error",
            ServiceError::InvalidPayload(_) => "invalid_json",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Internal(_) => "internal_error",
        }
    }

    fn message(&self) -> &str {
        match self {
            ServiceError::Validation(m)
            | ServiceError::InvalidPayload(m)
            | ServiceError::NotFound(m)
            | ServiceError::Internal(m) => m,
        }
    }

    pub fn to_response_body(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.kind().to_string(),
            message: self.message().to_string(),
            status_code: self.status_code().as_u16(),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(errors.to_string())
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) | ServiceError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_response_body())
    }
}

/// Handle JSON payload errors
///
/// Bodies that parse as JSON but miss required fields or carry wrong types
/// are validation failures; anything else is a bad payload.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    match err {
        error::JsonPayloadError::Deserialize(e) if e.is_data() => {
            ServiceError::Validation(e.to_string()).into()
        }
        other => ServiceError::InvalidPayload(other.to_string()).into(),
    }
}

/// Fallback for routes that do not exist
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ServiceError> {
    Err(ServiceError::NotFound(format!("No route for {} {}", req.method(), req.path())))
}

/// Rewrite any unhandled 500 into the structured internal error body
pub fn render_internal_error<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let (req, res) = res.into_parts();
    let detail = res
        .error()
        .map(|e| e.to_string())
        .unwrap_or_else(|| "unknown failure".to_string());

    tracing::error!(
        method = %req.method(),
        path = %req.path(),
        error = %detail,
        "Unhandled error while processing request"
    );

    let response = ServiceError::Internal("Unexpected failure while processing request".to_string())
        .error_response();
    let res: ServiceResponse<EitherBody<B>> = ServiceResponse::new(req, response).map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ServiceError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::InvalidPayload("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ServiceError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ServiceError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_response_body() {
        let body = ServiceError::Validation("photos is required".into()).to_response_body();
        assert_eq!(body.error, "validation_error");
        assert_eq!(body.message, "photos is required");
        assert_eq!(body.status_code, 400);
    }
}
