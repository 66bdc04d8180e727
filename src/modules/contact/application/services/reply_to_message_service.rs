use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ReplyToMessageError, ReplyToMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_message_repository::{
    ContactMessageRecord, ContactMessageRepository,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ReplyToMessageService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> ReplyToMessageService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ReplyToMessageUseCase for ReplyToMessageService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        id: Uuid,
        reply: String,
    ) -> Result<ContactMessageRecord, ReplyToMessageError> {
        let reply = reply.trim().to_string();
        if reply.is_empty() {
            return Err(ReplyToMessageError::EmptyReply);
        }

        Ok(self.repository.record_reply(id, reply).await?)
    }
}
