use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::contact::application::domain::intake::{ContactSubmission, IntakeError};
use crate::modules::contact::application::ports::outgoing::contact_message_repository::ContactMessageRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Result DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactMessageError {
    /// Caller-supplied input failed a precondition. The message is specific
    /// and safe to show.
    #[error("{0}")]
    Invalid(String),

    /// Persistence failed. The detail stays server-side.
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<IntakeError> for SubmitContactMessageError {
    fn from(err: IntakeError) -> Self {
        SubmitContactMessageError::Invalid(err.to_string())
    }
}

impl From<ContactMessageRepositoryError> for SubmitContactMessageError {
    fn from(err: ContactMessageRepositoryError) -> Self {
        SubmitContactMessageError::RepositoryError(err.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, SubmitContactMessageError>;
}
