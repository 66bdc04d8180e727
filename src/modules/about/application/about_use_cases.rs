use std::sync::Arc;

use crate::modules::about::application::ports::incoming::use_cases::{
    GetProfileUseCase, GetSkillListUseCase,
};

#[derive(Clone)]
pub struct AboutUseCases {
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub get_skill_list: Arc<dyn GetSkillListUseCase + Send + Sync>,
}
