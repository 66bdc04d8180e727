mod list_messages;
mod mark_messages_read;
mod reply_message;
mod submit_contact;

pub use list_messages::{list_messages_handler, ListMessagesQuery};
pub use mark_messages_read::{mark_messages_read_handler, MarkReadRequest};
pub use reply_message::{reply_message_handler, ReplyRequest};
pub use submit_contact::*;
