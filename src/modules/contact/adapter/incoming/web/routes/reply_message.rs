use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::ReplyToMessageError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    pub reply: String,
}

#[post("/api/admin/messages/{id}/reply")]
pub async fn reply_message_handler(
    path: web::Path<Uuid>,
    payload: web::Json<ReplyRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data
        .contact
        .reply
        .execute(id, payload.into_inner().reply)
        .await
    {
        Ok(record) => ApiResponse::success(record),

        Err(ReplyToMessageError::NotFound) => {
            ApiResponse::not_found("MESSAGE_NOT_FOUND", "Contact message not found")
        }

        Err(ReplyToMessageError::EmptyReply) => {
            ApiResponse::bad_request("VALIDATION_ERROR", "Reply text must not be empty")
        }

        Err(ReplyToMessageError::RepositoryError(msg)) => {
            error!("Failed to reply to message {}: {}", id, msg);
            ApiResponse::internal_error()
        }
    }
}
