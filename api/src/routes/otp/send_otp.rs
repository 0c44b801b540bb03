use actix_web::{web, HttpResponse};
use validator::Validate;

use pa_core::services::otp::{MailerTrait, OtpStoreTrait};
use pa_core::services::qa::{CompletionProviderTrait, ProfileSourceTrait};
use pa_shared::utils::email::mask_email;

use crate::dto::{SendOtpRequest, SendOtpResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /send-otp
///
/// Emails a fresh 6-digit code, replacing any earlier code for the address.
///
/// # Request Body
///
/// ```json
/// { "email": "visitor@example.com" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "OTP sent successfully", "email": "visitor@example.com" }
/// ```
///
/// ## Errors
/// - 400: malformed email (no email is sent)
/// - 500: email delivery failed or mail provider not configured
pub async fn send_otp<M, S, P, R>(
    state: web::Data<AppState<M, S, P, R>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    M: MailerTrait + 'static,
    S: OtpStoreTrait + 'static,
    P: CompletionProviderTrait + 'static,
    R: ProfileSourceTrait + 'static,
{
    let request = request.into_inner().trimmed();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    log::info!("Processing send-otp request for {}", mask_email(&request.email));

    match state.otp_service.request_code(&request.email).await {
        Ok(result) => {
            log::info!(
                "OTP sent to {}, message_id: {}",
                mask_email(&result.email),
                result.message_id
            );
            HttpResponse::Ok().json(SendOtpResponse {
                message: "OTP sent successfully".to_string(),
                email: result.email,
            })
        }
        Err(error) => domain_error_response(&error),
    }
}
