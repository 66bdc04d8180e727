// src/modules/contact/application/ports/outgoing/contact_message_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// The only fields the public side may ever write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessagePriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl MessagePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessagePriority::Low => "low",
            MessagePriority::Medium => "medium",
            MessagePriority::High => "high",
            MessagePriority::Urgent => "urgent",
        }
    }
}

impl std::str::FromStr for MessagePriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(MessagePriority::Low),
            "medium" => Ok(MessagePriority::Medium),
            "high" => Ok(MessagePriority::High),
            "urgent" => Ok(MessagePriority::Urgent),
            other => Err(format!("unknown message priority: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactMessageRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub priority: MessagePriority,
    pub is_read: bool,
    pub is_replied: bool,
    pub reply_message: Option<String>,
    pub created_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactMessageRepositoryError {
    #[error("Contact message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

/// Write-side for contact messages. The public fields of a persisted record
/// are immutable; the only mutations offered are the administrative flags,
/// and both are monotonic (false to true, never back).
#[async_trait]
pub trait ContactMessageRepository: Send + Sync {
    async fn insert(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessageRecord, ContactMessageRepositoryError>;

    /// Inbox listing, newest first.
    async fn list(
        &self,
        unread_only: bool,
    ) -> Result<Vec<ContactMessageRecord>, ContactMessageRepositoryError>;

    /// Flips is_read to true for the given ids; returns how many rows changed.
    async fn mark_read(&self, ids: &[Uuid]) -> Result<u64, ContactMessageRepositoryError>;

    /// Stores the reply text and flips is_replied to true.
    async fn record_reply(
        &self,
        id: Uuid,
        reply: String,
    ) -> Result<ContactMessageRecord, ContactMessageRepositoryError>;
}
