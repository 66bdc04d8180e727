use async_trait::async_trait;

use crate::modules::experience::application::ports::incoming::use_cases::{
    GetRecentExperiencesError, GetRecentExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceView,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetRecentExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> GetRecentExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRecentExperiencesUseCase for GetRecentExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(
        &self,
        limit: u64,
    ) -> Result<Vec<ExperienceView>, GetRecentExperiencesError> {
        Ok(self.query.recent(limit).await?)
    }
}
