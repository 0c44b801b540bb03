use actix_web::{web, HttpResponse};

use pa_core::services::otp::{MailerTrait, OtpStoreTrait};
use pa_core::services::qa::{CompletionProviderTrait, ProfileSourceTrait};

use super::AppState;
use crate::dto::{AskRequest, AskResponse};
use crate::handlers::domain_error_response;

/// Handler for POST /ask
///
/// Answers a question about the profile.
///
/// # Request Body
///
/// ```json
/// { "question": "What are your skills?" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "answer": "..." }
/// ```
///
/// ## Errors
/// - 400: empty question
/// - 500: profile missing or completion provider not configured
/// - 502: completion provider failed
pub async fn ask<M, S, P, R>(
    state: web::Data<AppState<M, S, P, R>>,
    request: web::Json<AskRequest>,
) -> HttpResponse
where
    M: MailerTrait + 'static,
    S: OtpStoreTrait + 'static,
    P: CompletionProviderTrait + 'static,
    R: ProfileSourceTrait + 'static,
{
    log::info!("Processing ask request ({} chars)", request.question.chars().count());

    match state.qa_service.answer(&request.question).await {
        Ok(answer) => HttpResponse::Ok().json(AskResponse { answer }),
        Err(error) => domain_error_response(&error),
    }
}
