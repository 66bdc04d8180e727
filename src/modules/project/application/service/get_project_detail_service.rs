use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::catalog::related_projects;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, GetProjectDetailUseCase, ProjectDetail,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

const RELATED_LIMIT: usize = 3;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectDetailUseCase for GetProjectDetailService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: Uuid) -> Result<ProjectDetail, GetProjectDetailError> {
        let project = self.query.get_by_id(project_id).await?;
        let catalog = self.query.list_public().await?;

        let related = related_projects(&catalog, &project, RELATED_LIMIT);

        Ok(ProjectDetail { project, related })
    }
}
