use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::incoming::use_cases::{
    MarkMessagesReadError, MarkMessagesReadUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_message_repository::ContactMessageRepository;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct MarkMessagesReadService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> MarkMessagesReadService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> MarkMessagesReadUseCase for MarkMessagesReadService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(&self, ids: Vec<Uuid>) -> Result<u64, MarkMessagesReadError> {
        if ids.is_empty() {
            return Ok(0);
        }

        Ok(self.repository.mark_read(&ids).await?)
    }
}
