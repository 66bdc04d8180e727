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

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AboutView {
    pub id: Uuid,
    pub name: String,
    pub headline: String,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub resume_url: Option<String>,
    pub github_username: String,
    pub telegram_username: String,
    pub blog_handle: String,
    pub channel_handle: String,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAbout {
    pub name: String,
    pub headline: String,
    pub description: String,
    pub profile_image_url: Option<String>,
    pub resume_url: Option<String>,
    pub github_username: String,
    pub telegram_username: String,
    pub blog_handle: String,
    pub channel_handle: String,
    pub skills: Vec<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutStoreError {
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

/// Store for the profile singleton. The table holds at most one row; callers
/// never insert a second.
#[async_trait]
pub trait AboutStore: Send + Sync {
    async fn find_first(&self) -> Result<Option<AboutView>, AboutStoreError>;

    async fn insert(&self, profile: NewAbout) -> Result<AboutView, AboutStoreError>;
}
