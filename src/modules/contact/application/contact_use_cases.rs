use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ListContactMessagesUseCase, MarkMessagesReadUseCase, ReplyToMessageUseCase,
    SubmitContactMessageUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub submit: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub list: Arc<dyn ListContactMessagesUseCase + Send + Sync>,
    pub mark_read: Arc<dyn MarkMessagesReadUseCase + Send + Sync>,
    pub reply: Arc<dyn ReplyToMessageUseCase + Send + Sync>,
}
