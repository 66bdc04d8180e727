use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::contact_message_repository::{
    ContactMessageRecord, ContactMessageRepositoryError,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplyToMessageError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Reply text must not be empty")]
    EmptyReply,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ContactMessageRepositoryError> for ReplyToMessageError {
    fn from(err: ContactMessageRepositoryError) -> Self {
        match err {
            ContactMessageRepositoryError::NotFound => ReplyToMessageError::NotFound,
            other => ReplyToMessageError::RepositoryError(other.to_string()),
        }
    }
}

/// Records the reply text and flips is_replied; never unsets either.
#[async_trait]
pub trait ReplyToMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        id: Uuid,
        reply: String,
    ) -> Result<ContactMessageRecord, ReplyToMessageError>;
}
