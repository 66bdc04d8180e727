use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetFeaturedProjectsError, GetFeaturedProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectView,
};

pub struct GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetFeaturedProjectsUseCase for GetFeaturedProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, limit: u64) -> Result<Vec<ProjectView>, GetFeaturedProjectsError> {
        self.query
            .featured(limit)
            .await
            .map_err(GetFeaturedProjectsError::from)
    }
}
