use async_trait::async_trait;

use crate::modules::experience::application::ports::incoming::use_cases::{
    ListExperiencesError, ListExperiencesUseCase,
};
use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQuery, ExperienceView,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ListExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    query: Q,
}

impl<Q> ListExperiencesService<Q>
where
    Q: ExperienceQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListExperiencesUseCase for ListExperiencesService<Q>
where
    Q: ExperienceQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ExperienceView>, ListExperiencesError> {
        Ok(self.query.list_all().await?)
    }
}
