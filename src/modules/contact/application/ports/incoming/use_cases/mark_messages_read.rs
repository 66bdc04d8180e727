use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::contact_message_repository::ContactMessageRepositoryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum MarkMessagesReadError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContactMessageRepositoryError> for MarkMessagesReadError {
    fn from(err: ContactMessageRepositoryError) -> Self {
        MarkMessagesReadError::RepositoryError(err.to_string())
    }
}

/// Bulk mark-as-read. is_read only ever moves false to true.
#[async_trait]
pub trait MarkMessagesReadUseCase: Send + Sync {
    async fn execute(&self, ids: Vec<Uuid>) -> Result<u64, MarkMessagesReadError>;
}
