use async_trait::async_trait;

use crate::modules::about::application::ports::outgoing::about_store::AboutStoreError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillListError {
    /// No profile row exists yet. This surface never seeds one.
    #[error("Profile not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<AboutStoreError> for GetSkillListError {
    fn from(err: AboutStoreError) -> Self {
        GetSkillListError::QueryFailed(err.to_string())
    }
}

#[async_trait]
pub trait GetSkillListUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, GetSkillListError>;
}
