use async_trait::async_trait;

use crate::modules::project::application::domain::catalog::{browse, BrowseRequest, BrowseResult};
use crate::modules::project::application::ports::incoming::use_cases::{
    BrowseProjectsError, BrowseProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct BrowseProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> BrowseProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> BrowseProjectsUseCase for BrowseProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, request: BrowseRequest) -> Result<BrowseResult, BrowseProjectsError> {
        let snapshot = self.query.list_public().await?;

        Ok(browse(snapshot, &request))
    }
}
