use async_trait::async_trait;

use crate::modules::project::application::domain::catalog::{BrowseRequest, BrowseResult};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BrowseProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for BrowseProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::DatabaseError(msg) => BrowseProjectsError::QueryFailed(msg),

            // Browsing never misses: an empty collection is a valid result.
            ProjectQueryError::NotFound => BrowseProjectsError::QueryFailed("Not found".to_string()),

            ProjectQueryError::SerializationError(msg) => BrowseProjectsError::QueryFailed(msg),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BrowseProjectsUseCase: Send + Sync {
    async fn execute(&self, request: BrowseRequest) -> Result<BrowseResult, BrowseProjectsError>;
}
