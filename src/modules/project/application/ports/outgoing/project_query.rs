// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectView {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub frameworks: Vec<String>,
    pub project_link: Option<String>,
    pub github_link: Option<String>,
    pub demo_link: Option<String>,
    pub image_url: Option<String>,
    pub is_featured: bool,
    pub is_public: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Every public project. The browse pipeline re-sorts and filters this
    /// snapshot in memory, so no ordering is promised here.
    async fn list_public(&self) -> Result<Vec<ProjectView>, ProjectQueryError>;

    /// Public read by id; a private project is NotFound from this surface.
    async fn get_by_id(&self, project_id: Uuid) -> Result<ProjectView, ProjectQueryError>;

    /// Up to `limit` featured public projects in display order.
    async fn featured(&self, limit: u64) -> Result<Vec<ProjectView>, ProjectQueryError>;
}
