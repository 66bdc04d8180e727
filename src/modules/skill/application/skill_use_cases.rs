use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::GetSkillOverviewUseCase;

#[derive(Clone)]
pub struct SkillUseCases {
    pub overview: Arc<dyn GetSkillOverviewUseCase + Send + Sync>,
}
