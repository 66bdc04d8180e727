use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::experience::application::domain::timeline::ExperienceType;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExperienceView {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: String,
    pub experience_type: ExperienceType,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExperienceQueryError {
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

/// Read-side for the experience timeline. Both queries return rows ordered
/// start_date desc, sort_order asc.
#[async_trait]
pub trait ExperienceQuery: Send + Sync {
    async fn list_all(&self) -> Result<Vec<ExperienceView>, ExperienceQueryError>;

    async fn recent(&self, limit: u64) -> Result<Vec<ExperienceView>, ExperienceQueryError>;
}
