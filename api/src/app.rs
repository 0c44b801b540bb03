//! Application routing and request configuration
//!
//! Routes are registered through `configure_routes` so the server binary
//! and the integration tests build the same application.

use actix_web::{web, HttpResponse};

use pa_core::services::otp::{MailerTrait, OtpStoreTrait};
use pa_core::services::qa::{CompletionProviderTrait, ProfileSourceTrait};
use pa_shared::errors::{error_codes, ErrorResponse};

use crate::handlers::json_error_handler;
use crate::routes::{ask::ask, health::health_check, otp};

/// Register every endpoint
pub fn configure_routes<M, S, P, R>(cfg: &mut web::ServiceConfig)
where
    M: MailerTrait + 'static,
    S: OtpStoreTrait + 'static,
    P: CompletionProviderTrait + 'static,
    R: ProfileSourceTrait + 'static,
{
    cfg.route("/health", web::get().to(health_check))
        .route("/ask", web::post().to(ask::<M, S, P, R>))
        .route("/send-otp", web::post().to(otp::send_otp::<M, S, P, R>))
        .route("/verify-otp", web::post().to(otp::verify_otp::<M, S, P, R>));
}

/// JSON extractor configuration with structured 400 errors
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}

/// Default 404 handler
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
