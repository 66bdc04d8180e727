use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesError, ListContactMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::contact_message_repository::{
    ContactMessageRecord, ContactMessageRepository,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ListContactMessagesService<R>
where
    R: ContactMessageRepository,
{
    repository: R,
}

impl<R> ListContactMessagesService<R>
where
    R: ContactMessageRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListContactMessagesUseCase for ListContactMessagesService<R>
where
    R: ContactMessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        unread_only: bool,
    ) -> Result<Vec<ContactMessageRecord>, ListContactMessagesError> {
        Ok(self.repository.list(unread_only).await?)
    }
}
