use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQueryError, ProjectView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPublicProjectsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ProjectQueryError> for ListPublicProjectsError {
    fn from(err: ProjectQueryError) -> Self {
        ListPublicProjectsError::QueryFailed(err.to_string())
    }
}

/// Machine-readable listing of every public project, in display order.
#[async_trait]
pub trait ListPublicProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectView>, ListPublicProjectsError>;
}
