//! Translation of domain and request errors into HTTP responses

use std::collections::HashMap;

use actix_web::{error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use pa_core::errors::DomainError;
use pa_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use validator::ValidationErrors;

/// HTTP status for a domain error
///
/// Caller mistakes map to 400, operator problems (missing profile or
/// credentials, failed email delivery) to 500 and completion provider
/// failures to 502.
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::InvalidInput { .. } | DomainError::Otp(_) => StatusCode::BAD_REQUEST,
        DomainError::Upstream { .. } => StatusCode::BAD_GATEWAY,
        DomainError::Configuration { .. }
        | DomainError::ProfileUnavailable { .. }
        | DomainError::DeliveryFailed { .. }
        | DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the error response for a domain error
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let status = status_for(error);
    if status.is_server_error() {
        log::error!("Request failed with {}: {}", status, error);
    } else {
        log::warn!("Request rejected with {}: {}", status, error);
    }

    HttpResponse::build(status).json(error.to_error_response())
}

/// Build a 400 response listing the fields that failed validation
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
    for (field, errors) in errors.field_errors() {
        let messages = errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        field_errors.insert(field.to_string(), messages);
    }

    let message = field_errors
        .values()
        .flatten()
        .next()
        .cloned()
        .unwrap_or_else(|| "Invalid request data".to_string());

    log::warn!("Validation failed: {:?}", field_errors);

    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, message).add_detail("fields", field_errors),
    )
}

/// Report malformed or oversized JSON bodies as structured 400 responses
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected JSON body for {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(ErrorResponse::new(
        error_codes::BAD_REQUEST,
        format!("Invalid request body: {}", err),
    ));
    actix_web::error::InternalError::from_response(err, response).into()
}
