use std::sync::Arc;

use crate::modules::experience::application::ports::incoming::use_cases::{
    GetRecentExperiencesUseCase, ListExperiencesUseCase,
};

#[derive(Clone)]
pub struct ExperienceUseCases {
    pub list: Arc<dyn ListExperiencesUseCase + Send + Sync>,
    pub recent: Arc<dyn GetRecentExperiencesUseCase + Send + Sync>,
}
