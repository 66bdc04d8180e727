use chrono::Utc;
use uuid::Uuid;

use crate::contact::application::ports::outgoing::contact_message_repository::{
    ContactMessageRecord, MessagePriority,
};

pub fn sample_message_record(subject: &str) -> ContactMessageRecord {
    ContactMessageRecord {
        id: Uuid::new_v4(),
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: subject.to_string(),
        message: "A sample message used in route tests".to_string(),
        phone: None,
        company: None,
        priority: MessagePriority::Medium,
        is_read: false,
        is_replied: false,
        reply_message: None,
        created_at: Utc::now(),
    }
}
