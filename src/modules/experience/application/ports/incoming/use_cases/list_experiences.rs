use async_trait::async_trait;

use crate::modules::experience::application::ports::outgoing::experience_query::{
    ExperienceQueryError, ExperienceView,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListExperiencesError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<ExperienceQueryError> for ListExperiencesError {
    fn from(err: ExperienceQueryError) -> Self {
        ListExperiencesError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait ListExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceView>, ListExperiencesError>;
}
