use async_trait::async_trait;

use crate::modules::skill::application::domain::proficiency::SkillGroup;
use crate::modules::skill::application::ports::outgoing::skill_query::SkillQueryError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSkillOverviewError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<SkillQueryError> for GetSkillOverviewError {
    fn from(err: SkillQueryError) -> Self {
        GetSkillOverviewError::QueryFailed(err.to_string())
    }
}

/// Skills grouped by category, in display order.
#[async_trait]
pub trait GetSkillOverviewUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillGroup>, GetSkillOverviewError>;
}
