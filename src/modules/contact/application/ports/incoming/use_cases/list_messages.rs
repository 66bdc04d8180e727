use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::contact_message_repository::{
    ContactMessageRecord, ContactMessageRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListContactMessagesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ContactMessageRepositoryError> for ListContactMessagesError {
    fn from(err: ContactMessageRepositoryError) -> Self {
        ListContactMessagesError::QueryFailed(err.to_string())
    }
}

/// Administrative inbox, newest first.
#[async_trait]
pub trait ListContactMessagesUseCase: Send + Sync {
    async fn execute(
        &self,
        unread_only: bool,
    ) -> Result<Vec<ContactMessageRecord>, ListContactMessagesError>;
}
