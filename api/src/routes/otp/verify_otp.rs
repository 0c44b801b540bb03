use actix_web::{web, HttpResponse};
use validator::Validate;

use pa_core::services::otp::{MailerTrait, OtpStoreTrait};
use pa_core::services::qa::{CompletionProviderTrait, ProfileSourceTrait};
use pa_shared::utils::email::mask_email;

use crate::dto::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::{domain_error_response, validation_error_response};
use crate::routes::AppState;

/// Handler for POST /verify-otp
///
/// Checks a submitted code. A correct code is consumed and cannot be used
/// again.
///
/// # Request Body
///
/// ```json
/// { "email": "visitor@example.com", "otp": "123456" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "OTP verified successfully", "verified": true }
/// ```
///
/// ## Errors
/// - 400: no code issued, code expired, wrong code or too many attempts
pub async fn verify_otp<M, S, P, R>(
    state: web::Data<AppState<M, S, P, R>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    M: MailerTrait + 'static,
    S: OtpStoreTrait + 'static,
    P: CompletionProviderTrait + 'static,
    R: ProfileSourceTrait + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    log::info!("Processing verify-otp request for {}", mask_email(request.email.trim()));

    match state.otp_service.verify_code(&request.email, &request.otp).await {
        Ok(result) => {
            log::info!("OTP verified for {}", mask_email(&result.email));
            HttpResponse::Ok().json(VerifyOtpResponse {
                message: "OTP verified successfully".to_string(),
                verified: true,
            })
        }
        Err(error) => domain_error_response(&error),
    }
}
