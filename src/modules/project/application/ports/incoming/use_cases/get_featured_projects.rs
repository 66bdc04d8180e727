use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQueryError, ProjectView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetFeaturedProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for GetFeaturedProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        GetFeaturedProjectsError::QueryFailed(err.to_string())
    }
}

/// The home page teaser: up to `limit` featured projects.
#[async_trait]
pub trait GetFeaturedProjectsUseCase: Send + Sync {
    async fn execute(&self, limit: u64) -> Result<Vec<ProjectView>, GetFeaturedProjectsError>;
}
