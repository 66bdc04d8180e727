use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQueryError, ProjectView,
};

//
// ──────────────────────────────────────────────────────────
// Result DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectDetail {
    pub project: ProjectView,
    pub related: Vec<ProjectView>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectDetailError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetProjectDetailError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => GetProjectDetailError::NotFound,
            ProjectQueryError::DatabaseError(msg) => GetProjectDetailError::QueryFailed(msg),
            ProjectQueryError::SerializationError(msg) => GetProjectDetailError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetProjectDetailUseCase: Send + Sync {
    async fn execute(&self, project_id: Uuid) -> Result<ProjectDetail, GetProjectDetailError>;
}
