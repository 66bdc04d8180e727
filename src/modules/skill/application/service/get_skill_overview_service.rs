use async_trait::async_trait;

use crate::modules::skill::application::domain::proficiency::{group_by_category, SkillGroup};
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillOverviewError, GetSkillOverviewUseCase,
};
use crate::modules::skill::application::ports::outgoing::skill_query::SkillQuery;

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetSkillOverviewService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSkillOverviewService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillOverviewUseCase for GetSkillOverviewService<Q>
where
    Q: SkillQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SkillGroup>, GetSkillOverviewError> {
        let skills = self.query.list_all().await?;

        Ok(group_by_category(skills))
    }
}
