mod list_messages_service;
mod mark_messages_read_service;
mod reply_to_message_service;
mod submit_message_service;

pub use list_messages_service::ListContactMessagesService;
pub use mark_messages_read_service::MarkMessagesReadService;
pub use reply_to_message_service::ReplyToMessageService;
pub use submit_message_service::SubmitContactMessageService;
