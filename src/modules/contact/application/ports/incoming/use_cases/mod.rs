mod list_messages;
mod mark_messages_read;
mod reply_to_message;
mod submit_message;

pub use list_messages::{ListContactMessagesError, ListContactMessagesUseCase};
pub use mark_messages_read::{MarkMessagesReadError, MarkMessagesReadUseCase};
pub use reply_to_message::{ReplyToMessageError, ReplyToMessageUseCase};
pub use submit_message::{SubmissionReceipt, SubmitContactMessageError, SubmitContactMessageUseCase};
