use async_trait::async_trait;

use crate::modules::project::application::domain::catalog::sort_catalog;
use crate::modules::project::application::ports::incoming::use_cases::{
    ListPublicProjectsError, ListPublicProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectView,
};

pub struct ListPublicProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> ListPublicProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListPublicProjectsUseCase for ListPublicProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectView>, ListPublicProjectsError> {
        let mut projects = self.query.list_public().await?;
        sort_catalog(&mut projects);

        Ok(projects)
    }
}
