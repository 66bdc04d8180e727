use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::MarkMessagesReadError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
struct MarkReadResponse {
    updated: u64,
}

#[post("/api/admin/messages/read")]
pub async fn mark_messages_read_handler(
    payload: web::Json<MarkReadRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.contact.mark_read.execute(payload.into_inner().ids).await {
        Ok(updated) => ApiResponse::success(MarkReadResponse { updated }),

        Err(MarkMessagesReadError::RepositoryError(msg)) => {
            error!("Failed to mark messages read: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
