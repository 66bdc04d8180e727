use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::domain::intake::{validate, ContactSubmission};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmissionReceipt, SubmitContactMessageError, SubmitContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_message_repository::{
    ContactMessageRepository, NewContactMessage,
};

const ACK_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

// ============================================================================
// Service Implementation
// ============================================================================

pub struct SubmitContactMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> SubmitContactMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitContactMessageUseCase for SubmitContactMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, SubmitContactMessageError> {
        let normalized = validate(&submission)?;

        let record = self
            .repository
            .insert(NewContactMessage {
                name: normalized.name,
                email: normalized.email,
                subject: normalized.subject,
                message: normalized.message,
            })
            .await?;

        info!(message_id = %record.id, "contact message received");

        Ok(SubmissionReceipt {
            id: record.id,
            message: ACK_MESSAGE.to_string(),
        })
    }
}
