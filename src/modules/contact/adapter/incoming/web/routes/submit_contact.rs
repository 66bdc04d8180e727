use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::contact::application::domain::intake::ContactSubmission;
use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/contact/submit",
    tag = "contact",
    request_body = ContactSubmission,
    responses(
        (status = 201, description = "Message accepted"),
        (status = 400, description = "Missing field or malformed email"),
        (status = 500, description = "Unexpected failure"),
    )
)]
#[post("/contact/submit")]
pub async fn submit_contact_handler(
    payload: web::Json<ContactSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.submit.execute(payload.into_inner()).await {
        Ok(receipt) => ApiResponse::created(receipt),

        Err(SubmitContactMessageError::Invalid(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SubmitContactMessageError::RepositoryError(msg)) => {
            error!("Failed to store contact message: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
