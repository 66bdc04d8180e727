use async_trait::async_trait;

use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQueryError, ExperienceView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetRecentExperiencesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ExperienceQueryError> for GetRecentExperiencesError {
    fn from(err: ExperienceQueryError) -> Self {
        GetRecentExperiencesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetRecentExperiencesUseCase: Send + Sync {
    async fn execute(&self, limit: u64)
        -> Result<Vec<ExperienceView>, GetRecentExperiencesError>;
}
